/**
 * Authentication Middleware
 *
 * Protects the `/api/me` and `/api/messages` routes. The middleware extracts
 * the bearer token from the Authorization header, verifies it with the
 * configured identity provider and attaches the resulting `Principal` to the
 * request extensions. Handlers read it back through the `AuthUser` and
 * `AdminUser` extractors.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::Principal;

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing Authorization header")
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid Authorization header format")
        })?;

    Ok(token)
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the identity provider
/// 3. Attaches the principal to request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid; the wrapped
/// handler does not run in that case.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;

    let principal = app_state.identity.verify(token).await.map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        if e.status_code().is_server_error() {
            BackendError::from(e)
        } else {
            BackendError::unauthorized("Invalid or expired token")
        }
    })?;

    tracing::debug!(uid = %principal.uid, "Request authenticated");
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated principal
///
/// Only valid on routes wrapped by `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Principal not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(principal))
    }
}

/// Axum extractor for a principal on the admin allow-list
///
/// Rejects with 401 when unauthenticated and 403 when the principal's e-mail
/// is not an administrator address.
#[derive(Clone, Debug)]
pub struct AdminUser(pub Principal);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;

        if !state.admins.is_admin(&principal) {
            tracing::warn!(uid = %principal.uid, "Admin access denied");
            return Err(BackendError::forbidden("Admin access required"));
        }

        Ok(AdminUser(principal))
    }
}
