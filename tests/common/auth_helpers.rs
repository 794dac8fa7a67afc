//! Authentication test helpers
//!
//! Builds a board router whose identity provider is a `SharedSecretVerifier`,
//! so tests can mint tokens for any principal.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum_test::TestServer;
use boardkit::backend::auth::{AdminAllowList, SharedSecretVerifier};
use boardkit::backend::routes::create_router;
use boardkit::backend::{AppState, MemoryMessageStore, MessageStore, ServerConfig};
use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use serde_json::json;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// A running board plus handles to its identity provider and store
pub struct TestBoard {
    pub server: TestServer,
    pub verifier: Arc<SharedSecretVerifier>,
    pub store: Arc<MemoryMessageStore>,
}

impl TestBoard {
    pub fn new() -> Self {
        Self::with_admins(&[ADMIN_EMAIL])
    }

    pub fn with_admins(admins: &[&str]) -> Self {
        let verifier = Arc::new(SharedSecretVerifier::new(TEST_SECRET));
        let store = Arc::new(MemoryMessageStore::new());
        let state = AppState::new(store.clone(), verifier.clone(), AdminAllowList::new(admins));

        let app = create_router(state, &ServerConfig::default());
        let server = TestServer::new(app).expect("Failed to start test server");

        Self { server, verifier, store }
    }

    /// Token for a principal with the given uid and e-mail
    pub fn token(&self, uid: &str, email: Option<&str>) -> String {
        self.verifier
            .issue_token(uid, email)
            .expect("Failed to issue test token")
    }

    pub fn admin_token(&self) -> String {
        self.token("admin-uid", Some(ADMIN_EMAIL))
    }

    pub fn user_token(&self) -> String {
        self.token("user-uid", Some("user@example.com"))
    }

    /// Token from a different signing secret
    pub fn foreign_token(&self) -> String {
        SharedSecretVerifier::new("some-other-secret")
            .issue_token("user-uid", Some("user@example.com"))
            .expect("Failed to issue foreign token")
    }

    /// Correctly signed token that expired an hour ago
    pub fn expired_token(&self) -> String {
        let now = get_current_timestamp();
        let claims = json!({
            "sub": "user-uid",
            "email": "user@example.com",
            "iat": now - 7200,
            "exp": now - 3600,
        });
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .expect("Failed to encode expired token")
    }

    /// Number of stored messages, read directly from the store
    pub async fn stored_count(&self) -> usize {
        self.store.list().await.expect("Failed to list store").len()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value")
}
