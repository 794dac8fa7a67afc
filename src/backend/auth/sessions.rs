/**
 * Shared-Secret Tokens
 *
 * HS256 tokens signed with a server-side secret. Used when the board runs
 * without a Firebase project (local development) and by the test suites,
 * which mint tokens for arbitrary users with `issue_token`.
 */

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::backend::auth::identity::{Claims, IdentityError, IdentityVerifier};
use crate::shared::Principal;

/// Default lifetime of issued tokens
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Verifier (and issuer) for HS256 tokens
#[derive(Clone)]
pub struct SharedSecretVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl SharedSecretVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Create a token for a user
    pub fn issue_token(&self, uid: &str, email: Option<&str>) -> Result<String, IdentityError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: uid.to_string(),
            email: email.map(str::to_string),
            exp: now + self.token_ttl.as_secs(),
            iat: now,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify and decode a token
    pub fn decode_token(&self, token: &str) -> Result<Principal, IdentityError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Principal::try_from(token_data.claims)
    }
}

#[async_trait]
impl IdentityVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, IdentityError> {
        self.decode_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_decode_token() {
        let verifier = SharedSecretVerifier::new("test-secret");
        let token = verifier.issue_token("u1", Some("u1@example.com")).unwrap();

        let principal = verifier.decode_token(&token).unwrap();
        assert_eq!(principal.uid, "u1");
        assert_eq!(principal.email.as_deref(), Some("u1@example.com"));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = SharedSecretVerifier::new("secret-a");
        let verifier = SharedSecretVerifier::new("secret-b");
        let token = issuer.issue_token("u1", None).unwrap();

        assert!(matches!(
            verifier.decode_token(&token),
            Err(IdentityError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_verify_invalid_token() {
        let verifier = SharedSecretVerifier::new("test-secret");
        assert!(verifier.decode_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let verifier = SharedSecretVerifier::new("test-secret");
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: "u1".to_string(),
            email: None,
            // well past the default 60s leeway
            exp: now - 600,
            iat: now - 1200,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(verifier.decode_token(&token).is_err());
    }

    #[tokio::test]
    async fn test_verify_through_trait() {
        let verifier = SharedSecretVerifier::new("test-secret");
        let token = verifier.issue_token("u2", None).unwrap();

        let principal = verifier.verify(&token).await.unwrap();
        assert_eq!(principal.uid, "u2");
        assert!(principal.email.is_none());
    }
}
