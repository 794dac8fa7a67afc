/**
 * Sign-In Exchange Handler
 *
 * `POST /api/auth/google` verifies an identity-provider ID token and returns
 * the principal it belongs to. Nothing is stored; the client keeps using the
 * same token as its bearer credential.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::identity::{IdentityError, IdentityVerifier};
use crate::backend::error::BackendError;
use crate::shared::{GoogleSignInRequest, Principal};

/// Sign-in exchange handler
///
/// # Errors
///
/// * `401 Unauthorized` - The provider rejected the token
/// * `502 Bad Gateway` - The provider's signing keys could not be fetched
///
/// # Example Request
///
/// ```http
/// POST /api/auth/google HTTP/1.1
/// Content-Type: application/json
///
/// { "idToken": "eyJhbGciOiJSUzI1NiIsImtpZCI6..." }
/// ```
///
/// # Example Response
///
/// ```json
/// { "uid": "hQ3k9...", "email": "user@example.com" }
/// ```
pub async fn sign_in_with_google(
    State(identity): State<Arc<dyn IdentityVerifier>>,
    Json(request): Json<GoogleSignInRequest>,
) -> Result<Json<Principal>, BackendError> {
    let principal = identity.verify(&request.id_token).await.map_err(|e| {
        tracing::warn!("Sign-in rejected: {}", e);
        match e {
            IdentityError::KeyFetch(_) => BackendError::from(e),
            _ => BackendError::unauthorized("Invalid ID token"),
        }
    })?;

    tracing::info!(uid = %principal.uid, "Sign-in accepted");
    Ok(Json(principal))
}
