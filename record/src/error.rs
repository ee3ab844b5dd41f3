//! Error types for extensible records.

use crate::FieldName;
use thiserror::Error;

/// All possible errors from merging or splitting a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Input errors
    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(String),

    #[error("type mismatch for field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: FieldName,
        expected: String,
        got: String,
    },

    // Output errors
    #[error("cannot encode field '{field}': {message}")]
    Encoding { field: FieldName, message: String },

    // Schema errors
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("unknown field: {0}")]
    UnknownField(FieldName),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidJson(err.to_string())
    }
}

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::NotAnObject("Array".into());
        assert_eq!(err.to_string(), "expected a JSON object, got Array");

        let err = Error::UnknownField("kind".into());
        assert_eq!(err.to_string(), "unknown field: kind");

        let err = Error::TypeMismatch {
            field: "age".into(),
            expected: "u32".into(),
            got: "String".into(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for field 'age': expected u32, got String"
        );
    }

    #[test]
    fn json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidJson(msg) if msg.contains("line 1")));
    }
}
