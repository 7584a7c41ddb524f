//! Integration constants and connection configuration.
//!
//! Default values, configuration keys and the validated
//! [`LuxtronikConfig`] live here so every consumer reads them from one place.

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::{self, IntegerError};
use crate::error::ConfigurationError;

/// Integration domain; also the key of the integration block in the
/// platform configuration.
pub const DOMAIN: &str = "luxtronik2";

/// Default controller port.
pub const DEFAULT_PORT: u16 = 8888;

/// Default temperature tolerance for climate entities.
pub const DEFAULT_TOLERANCE: f64 = 0.3;

/// Default write lock timeout in seconds.
pub const DEFAULT_LOCK_TIMEOUT_SECS: u64 = 30;

/// Minimum time between two polls of the controller.
pub const MIN_TIME_BETWEEN_UPDATES: Duration = Duration::from_secs(10);

/// Platforms set up by the integration.
pub const PLATFORMS: [Platform; 3] = [Platform::Climate, Platform::Sensor, Platform::Number];

/// Configuration keys.
pub mod keys {
    pub const HOST: &str = "host";
    pub const PORT: &str = "port";
    pub const SAFE: &str = "safe";
    pub const LOCK_TIMEOUT: &str = "lock_timeout";
    pub const UPDATE_IMMEDIATELY_AFTER_WRITE: &str = "update_immediately_after_write";

    pub const PARAMETERS: &str = "parameters";
    pub const CALCULATIONS: &str = "calculations";
    pub const VISIBILITIES: &str = "visibilities";

    pub const COORDINATOR: &str = "coordinator";

    pub const CONTROL_MODE_HOME_ASSISTANT: &str = "control_mode_home_assistant";
    pub const HA_SENSOR_INDOOR_TEMPERATURE: &str = "ha_sensor_indoor_temperature";
    pub const LANGUAGE_SENSOR_NAMES: &str = "language_sensor_names";

    /// Legacy sensor grouping key.
    pub const GROUP: &str = "group";
}

/// Entity attribute names.
pub mod attrs {
    pub const PARAMETER: &str = "parameter";
    pub const VALUE: &str = "value";
    pub const STATUS_TEXT: &str = "status_text";
}

/// Entity platform kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Climate,
    Sensor,
    Number,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Climate => "climate",
            Platform::Sensor => "sensor",
            Platform::Number => "number",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language used for sensor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(ConfigurationError::InvalidType {
                key: keys::LANGUAGE_SENSOR_NAMES.to_string(),
                expected: "one of: en, de",
            }),
        }
    }
}

/// Validated connection configuration for one controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuxtronikConfig {
    /// Controller host name or address.
    pub host: String,

    /// Controller port.
    pub port: u16,

    /// Only allow writes to parameters known to be safe.
    pub safe: bool,

    /// Seconds a write may hold the connection lock.
    pub lock_timeout: u64,

    /// Refresh state right after a successful write.
    pub update_immediately_after_write: bool,

    /// Keys the schema does not know about, kept as given. Never holds a
    /// schema key, so flattening cannot shadow a validated field.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl LuxtronikConfig {
    /// Create a configuration with default settings for `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            safe: true,
            lock_timeout: DEFAULT_LOCK_TIMEOUT_SECS,
            update_immediately_after_write: false,
            extra: Map::new(),
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the safe-write flag.
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }

    /// Set the lock timeout in seconds.
    pub fn with_lock_timeout(mut self, secs: u64) -> Self {
        self.lock_timeout = secs;
        self
    }

    /// Set whether to refresh after writes.
    pub fn with_update_immediately_after_write(mut self, enabled: bool) -> Self {
        self.update_immediately_after_write = enabled;
        self
    }

    /// Add a passthrough key. Schema keys are ignored; use the typed
    /// setters for those.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if is_schema_key(&key) {
            tracing::warn!(key = %key, "Ignoring schema key passed as extra");
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Keys the schema does not know about.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Validate the integration block of a configuration document.
    ///
    /// Optional keys are filled with their defaults. Unknown keys are kept
    /// and available through [`LuxtronikConfig::extra`].
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        let obj = value.as_object().ok_or(ConfigurationError::NotAnObject)?;

        let host = match obj.get(keys::HOST) {
            None => return Err(ConfigurationError::MissingField(keys::HOST.to_string())),
            Some(v) => coerce::string(v).ok_or_else(|| invalid(keys::HOST, "string"))?,
        };
        if host.trim().is_empty() {
            return Err(ConfigurationError::EmptyHost);
        }

        let port = match obj.get(keys::PORT) {
            None => DEFAULT_PORT,
            Some(v) => {
                let port = integer(v, keys::PORT, 1, i64::from(u16::MAX))?;
                u16::try_from(port).map_err(|_| {
                    out_of_range(keys::PORT, port.to_string(), 1, i64::from(u16::MAX))
                })?
            }
        };

        let safe = optional_bool(obj, keys::SAFE, true)?;

        let lock_timeout = match obj.get(keys::LOCK_TIMEOUT) {
            None => DEFAULT_LOCK_TIMEOUT_SECS,
            Some(v) => {
                let secs = integer(v, keys::LOCK_TIMEOUT, 0, i64::MAX)?;
                u64::try_from(secs)
                    .map_err(|_| out_of_range(keys::LOCK_TIMEOUT, secs.to_string(), 0, i64::MAX))?
            }
        };

        let update_immediately_after_write =
            optional_bool(obj, keys::UPDATE_IMMEDIATELY_AFTER_WRITE, false)?;

        let extra: Map<String, Value> = obj
            .iter()
            .filter(|(k, _)| !is_schema_key(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        tracing::debug!(
            host = %host,
            port,
            safe,
            lock_timeout,
            extra_keys = extra.len(),
            "Validated {} configuration",
            DOMAIN
        );

        Ok(Self {
            host,
            port,
            safe,
            lock_timeout,
            update_immediately_after_write,
            extra,
        })
    }

    /// Render the configuration as a mapping, passthrough keys included.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Lock timeout as a duration.
    pub fn lock_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.lock_timeout)
    }

    /// `host:port` for opening the controller socket.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Validate a full platform configuration document.
///
/// The document must contain the [`DOMAIN`] block. Other top-level keys
/// belong to other integrations and are ignored.
pub fn validate_config(document: &Value) -> Result<LuxtronikConfig, ConfigurationError> {
    let obj = document.as_object().ok_or(ConfigurationError::NotAnObject)?;
    let block = obj
        .get(DOMAIN)
        .ok_or_else(|| ConfigurationError::MissingDomain(DOMAIN.to_string()))?;
    LuxtronikConfig::from_value(block)
}

fn is_schema_key(key: &str) -> bool {
    matches!(
        key,
        keys::HOST
            | keys::PORT
            | keys::SAFE
            | keys::LOCK_TIMEOUT
            | keys::UPDATE_IMMEDIATELY_AFTER_WRITE
    )
}

fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigurationError> {
    match obj.get(key) {
        None => Ok(default),
        Some(v) => coerce::boolean(v).ok_or_else(|| invalid(key, "boolean")),
    }
}

fn integer(value: &Value, key: &str, min: i64, max: i64) -> Result<i64, ConfigurationError> {
    let n = coerce::integer(value).map_err(|err| match err {
        IntegerError::NotAnInteger => invalid(key, "integer"),
        IntegerError::Overflow(raw) => out_of_range(key, raw, min, max),
    })?;
    if (min..=max).contains(&n) {
        Ok(n)
    } else {
        Err(out_of_range(key, n.to_string(), min, max))
    }
}

fn out_of_range(key: &str, value: String, min: i64, max: i64) -> ConfigurationError {
    ConfigurationError::OutOfRange {
        key: key.to_string(),
        value,
        min,
        max,
    }
}

fn invalid(key: &str, expected: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidType {
        key: key.to_string(),
        expected,
    }
}
