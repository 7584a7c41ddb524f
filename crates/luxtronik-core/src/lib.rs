//! Configuration and lookup registry for the Luxtronik 2 heat-pump bridge.
//!
//! This crate holds the static data the rest of the bridge is built on:
//! connection configuration with its validator, the write-service schema,
//! controller status labels and the unit-class decoration tables.
//!
//! ## Example
//!
//! ```rust
//! use luxtronik_core::prelude::*;
//!
//! let config = LuxtronikConfig::from_value(&serde_json::json!({
//!     "host": "192.168.1.20",
//! }))?;
//! assert_eq!(config.port, DEFAULT_PORT);
//! assert!(config.safe);
//!
//! let status = LuxStatus::from_code(4);
//! assert_eq!(status.label(), "defrost");
//! assert!(status.is_on());
//! # Ok::<(), luxtronik_core::Error>(())
//! ```

pub(crate) mod coerce;
pub mod config;
pub mod error;
pub mod modes;
pub mod sensors;
pub mod service;
pub mod status;
pub mod units;

pub use config::{validate_config, LuxtronikConfig, Platform, Language};
pub use error::{ConfigurationError, Error, Result, ValidationError};
pub use modes::LuxMode;
pub use sensors::{SensorGroup, SensorKey};
pub use service::{WriteRequest, WriteValue};
pub use status::{is_active_label, status_display, LuxStatus, StatusInfo};
pub use units::{unit_info, DeviceClass, UnitClass, UnitInfo};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-exports commonly used types.
pub mod prelude {
    // Configuration
    pub use crate::config::{
        keys, validate_config, Language, LuxtronikConfig, Platform, DEFAULT_LOCK_TIMEOUT_SECS,
        DEFAULT_PORT, DEFAULT_TOLERANCE, DOMAIN, MIN_TIME_BETWEEN_UPDATES, PLATFORMS,
    };

    // Error handling
    pub use crate::error::{ConfigurationError, Error, Result, ValidationError};

    // Lookups
    pub use crate::modes::LuxMode;
    pub use crate::sensors::{SensorGroup, SensorKey};
    pub use crate::service::{WriteRequest, WriteValue, SERVICE_WRITE};
    pub use crate::status::{is_active_label, status_display, LuxStatus, StatusInfo};
    pub use crate::units::{unit_info, DeviceClass, UnitClass, UnitInfo};
}
