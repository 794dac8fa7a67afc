/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the board server. Every handler
 * and middleware returns `BackendError`, which maps onto an HTTP status:
 *
 * - `Unauthorized` - missing or invalid bearer token, failed sign-in
 * - `Forbidden` - valid principal outside the admin allow-list
 * - `Identity` - token rejected by the identity provider (or its keys unavailable)
 * - `Datastore` - insert or query failure in the message store
 * - `SharedError` - request validation failures
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::auth::identity::IdentityError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use boardkit::backend::error::BackendError;
///
/// let err = BackendError::unauthorized("Missing Authorization header");
/// let err = BackendError::forbidden("Admin access required");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Caller could not be authenticated
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Caller is authenticated but not allowed to perform the operation
    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
    },

    /// Generic handler error carrying an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        status: StatusCode,
        message: String,
    },

    /// Identity provider rejected the token or could not be reached
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Message store failure
    #[error("Datastore error: {0}")]
    Datastore(#[from] sqlx::Error),

    /// Shared error (validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized` - 401
    /// - `Forbidden` - 403
    /// - `HandlerError` - Uses the status code from the error
    /// - `Identity` - 401, or 502 when the provider's keys cannot be fetched
    /// - `Datastore` - 500
    /// - `SharedError` - 400 for validation, 500 for serialization
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::HandlerError { status, .. } => *status,
            Self::Identity(err) => err.status_code(),
            Self::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Get the client-facing error message
    ///
    /// Datastore details never leave the server; they are logged when the
    /// error is turned into a response.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message } => message.clone(),
            Self::Forbidden { message } => message.clone(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Identity(err) => err.to_string(),
            Self::Datastore(_) => "Internal server error".to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error() {
        let error = BackendError::unauthorized("Missing token");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), "Missing token");
    }

    #[test]
    fn test_forbidden_error() {
        let error = BackendError::forbidden("Admin access required");
        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_status_code_mapping() {
        let handler_error = BackendError::handler(StatusCode::NOT_FOUND, "Nope");
        assert_eq!(handler_error.status_code(), StatusCode::NOT_FOUND);

        let datastore_error = BackendError::from(sqlx::Error::RowNotFound);
        assert_eq!(datastore_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let identity_error = BackendError::from(IdentityError::UnknownKey("kid-1".to_string()));
        assert_eq!(identity_error.status_code(), StatusCode::UNAUTHORIZED);

        let fetch_error = BackendError::from(IdentityError::KeyFetch("timeout".to_string()));
        assert_eq!(fetch_error.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_from_shared_error() {
        let backend_error: BackendError = SharedError::validation("text", "empty").into();
        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_datastore_message_is_masked() {
        let error = BackendError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error.message(), "Internal server error");
    }
}
