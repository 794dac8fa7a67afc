/**
 * Identity Verification
 *
 * The board never issues its own sessions for production users: every
 * request carries an identity-provider token, and an `IdentityVerifier`
 * turns that token into a `Principal` or rejects it.
 *
 * Two verifiers exist:
 * - `FirebaseVerifier` (see `auth::firebase`) for Firebase ID tokens
 * - `SharedSecretVerifier` (see `auth::sessions`) for HS256 tokens used in
 *   local development and tests
 */

use axum::http::StatusCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::Principal;

/// Errors raised while verifying an identity token
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Signature, expiry, audience or issuer check failed
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token header names a key the provider does not publish
    #[error("Token signed with unknown key: {0}")]
    UnknownKey(String),

    /// Token has an empty subject
    #[error("Token is missing a subject")]
    MissingSubject,

    /// Provider key set could not be downloaded or parsed
    #[error("Failed to fetch identity provider keys: {0}")]
    KeyFetch(String),
}

impl IdentityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::KeyFetch(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Claims read from identity tokens
///
/// Only the fields the board uses are modelled; audience and issuer are
/// checked by `jsonwebtoken::Validation` before these are deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// External user id
    pub sub: String,
    /// E-mail address, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: u64,
}

impl TryFrom<Claims> for Principal {
    type Error = IdentityError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.sub.trim().is_empty() {
            return Err(IdentityError::MissingSubject);
        }
        Ok(Principal::new(claims.sub, claims.email))
    }
}

/// Resolves a bearer token into the principal it was issued for
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, IdentityError>;
}
