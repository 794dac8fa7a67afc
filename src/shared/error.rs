//! Shared Error Types
//!
//! Errors that can be raised by code compiled into both the server and the
//! desktop client: request validation and JSON (de)serialization.
//!
//! # Usage
//!
//! ```rust
//! use boardkit::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Message text cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("text", "Message text cannot be empty");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "text");
                assert_eq!(message, "Message text cannot be empty");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("text", "too short");
        let display = format!("{}", error);
        assert!(display.contains("'text'"));
        assert!(display.contains("too short"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { message } => assert!(message.starts_with("JSON error")),
            _ => panic!("Expected SerializationError from serde error"),
        }
    }
}
