//! Error types raised while validating configuration and service requests.

/// Connection configuration failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The configuration document is not a mapping.
    #[error("Configuration must be a mapping")]
    NotAnObject,

    /// The integration block is absent from the configuration document.
    #[error("Missing integration section: {0}")]
    MissingDomain(String),

    /// A required key is absent.
    #[error("Missing required key: {0}")]
    MissingField(String),

    /// A key holds a value of the wrong type.
    #[error("Invalid value for {key}: expected {expected}")]
    InvalidType {
        key: String,
        expected: &'static str,
    },

    /// A numeric key lies outside its allowed range.
    #[error("Value {value} for {key} out of range [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: String,
        min: i64,
        max: i64,
    },

    /// The host is blank.
    #[error("Host must not be empty")]
    EmptyHost,
}

/// Write-service request or sensor key failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request is not a mapping.
    #[error("Service data must be a mapping")]
    NotAnObject,

    /// A required key is absent.
    #[error("Missing required key: {0}")]
    MissingField(String),

    /// A key holds a value of the wrong type.
    #[error("Invalid value for {key}: expected {expected}")]
    InvalidType {
        key: String,
        expected: &'static str,
    },

    /// The parameter name is blank.
    #[error("Parameter name must not be empty")]
    EmptyParameter,

    /// The request carries a key the service does not accept.
    #[error("Unexpected key: {0}")]
    UnexpectedField(String),

    /// A sensor key is not of the form `group.ID`.
    #[error("Invalid sensor key: {0}")]
    InvalidSensorKey(String),

    /// A unit-class key is not in the unit table.
    #[error("Unknown unit class: {0}")]
    UnknownUnitClass(String),
}

/// Unified error type for the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;
