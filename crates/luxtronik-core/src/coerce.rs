//! Scalar coercion shared by the configuration and service validators.
//!
//! These mirror the lenient validators of the home-automation platform:
//! YAML and form input often arrives as strings, so numbers and booleans
//! are accepted in their textual forms as well. Callers attach their own
//! error type when a value cannot be coerced.

use serde_json::Value;

const TRUE_WORDS: [&str; 5] = ["1", "true", "yes", "on", "enable"];
const FALSE_WORDS: [&str; 5] = ["0", "false", "no", "off", "disable"];

/// Coerce to a string. Numbers are rendered as decimal text.
pub fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce to a boolean.
pub fn boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => {
            let word = s.trim().to_lowercase();
            if TRUE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if FALSE_WORDS.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Exclusive bound of `i64` as a float; `i64::MAX as f64` rounds up to it.
const I64_BOUND: f64 = 9.223_372_036_854_775_808e18;

/// Why a value could not be coerced to an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerError {
    /// The value is not an integer at all.
    NotAnInteger,
    /// The value is an integer that does not fit in `i64`.
    Overflow(String),
}

/// Coerce to an integer. Floats are accepted only without a fractional part.
pub fn integer(value: &Value) -> Result<i64, IntegerError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(IntegerError::Overflow(n.to_string()));
            }
            let f = n.as_f64().ok_or(IntegerError::NotAnInteger)?;
            if f.fract() != 0.0 {
                Err(IntegerError::NotAnInteger)
            } else if (-I64_BOUND..I64_BOUND).contains(&f) {
                Ok(f as i64)
            } else {
                Err(IntegerError::Overflow(n.to_string()))
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse() {
                return Ok(i);
            }
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Err(IntegerError::Overflow(s.to_string()))
            } else {
                Err(IntegerError::NotAnInteger)
            }
        }
        _ => Err(IntegerError::NotAnInteger),
    }
}
