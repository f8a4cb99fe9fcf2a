use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasteboxError {
    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{operation}: required value is absent")]
    MissingValue { operation: &'static str },

    #[error("{operation}: field name cannot be empty")]
    EmptyFieldName { operation: &'static str },

    #[error("Cannot parse '{value}' as a 64-bit integer: {source}")]
    NumberFormat {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("No such method: {type_name}.{method}")]
    NoSuchMethod { type_name: String, method: String },

    #[error("No such field: {type_name}.{field}")]
    NoSuchField { type_name: String, field: String },

    #[error("Access denied to {type_name}.{member}")]
    AccessDenied { type_name: String, member: String },

    #[error("Type mismatch on '{member}': expected {expected}, found {found}")]
    TypeMismatch {
        member: String,
        expected: String,
        found: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PasteboxError {
    /// True for failures raised while resolving a field or accessor by name.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            PasteboxError::NoSuchMethod { .. }
                | PasteboxError::NoSuchField { .. }
                | PasteboxError::AccessDenied { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PasteboxError>;
