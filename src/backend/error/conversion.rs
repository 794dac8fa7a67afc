/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly. Error responses are JSON:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unknown routes
pub async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
