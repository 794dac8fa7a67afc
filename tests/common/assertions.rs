//! Custom assertions for board API responses

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert the response is a JSON error body with the given status
pub fn assert_error(response: &TestResponse, status: StatusCode) {
    assert_eq!(response.status_code(), status);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], status.as_u16());
    assert!(
        body["error"].as_str().is_some_and(|e| !e.is_empty()),
        "missing error message in {}",
        body
    );
}
