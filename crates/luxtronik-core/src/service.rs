//! Write-service request schema.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::coerce;
use crate::config::attrs;
use crate::error::ValidationError;

/// Name of the service that writes a controller parameter.
pub const SERVICE_WRITE: &str = "write";

/// Value written to a controller parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WriteValue {
    Number(Number),
    Text(String),
}

impl WriteValue {
    /// Numeric view of the value. Text is never parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            WriteValue::Number(n) => n.as_f64(),
            WriteValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for WriteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteValue::Number(n) => write!(f, "{}", n),
            WriteValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for WriteValue {
    fn from(v: i64) -> Self {
        WriteValue::Number(v.into())
    }
}

impl From<&str> for WriteValue {
    fn from(v: &str) -> Self {
        WriteValue::Text(v.to_string())
    }
}

/// Validated `write` service call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteRequest {
    /// Controller parameter name, e.g. `ID_Ba_Hz_akt`.
    pub parameter: String,
    pub value: WriteValue,
}

impl WriteRequest {
    pub fn new(parameter: impl Into<String>, value: impl Into<WriteValue>) -> Self {
        Self {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Validate service call data.
    pub fn from_value(data: &Value) -> Result<Self, ValidationError> {
        let obj = data.as_object().ok_or(ValidationError::NotAnObject)?;

        if let Some(key) = obj
            .keys()
            .find(|k| k.as_str() != attrs::PARAMETER && k.as_str() != attrs::VALUE)
        {
            return Err(ValidationError::UnexpectedField(key.clone()));
        }

        let parameter = obj
            .get(attrs::PARAMETER)
            .ok_or_else(|| ValidationError::MissingField(attrs::PARAMETER.to_string()))?;
        let parameter = coerce::string(parameter).ok_or_else(|| ValidationError::InvalidType {
            key: attrs::PARAMETER.to_string(),
            expected: "string",
        })?;
        if parameter.trim().is_empty() {
            return Err(ValidationError::EmptyParameter);
        }

        let value = match obj.get(attrs::VALUE) {
            None => return Err(ValidationError::MissingField(attrs::VALUE.to_string())),
            Some(Value::Number(n)) => WriteValue::Number(n.clone()),
            Some(Value::String(s)) => WriteValue::Text(s.clone()),
            Some(_) => {
                return Err(ValidationError::InvalidType {
                    key: attrs::VALUE.to_string(),
                    expected: "number or string",
                })
            }
        };

        tracing::debug!(parameter = %parameter, value = %value, "Validated write request");
        Ok(Self { parameter, value })
    }

    /// Render the request as service call data.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
