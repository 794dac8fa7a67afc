//! Firebase ID token verification against a mock key endpoint
//!
//! Tokens are signed with `fixtures/firebase_test_key.pem`; the matching
//! public key is served from `fixtures/firebase_test_jwks.json` by wiremock.

#![cfg(feature = "ssr")]

mod common;

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::{header, StatusCode};
use axum_test::TestServer;
use boardkit::backend::auth::{AdminAllowList, FirebaseVerifier, IdentityError};
use boardkit::backend::routes::create_router;
use boardkit::backend::{AppState, MemoryMessageStore, ServerConfig};
use boardkit::shared::Principal;
use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::auth_header;

const PROJECT_ID: &str = "boardkit-test";
const KID: &str = "test-key-1";
const PRIVATE_KEY: &[u8] = include_bytes!("fixtures/firebase_test_key.pem");
const JWKS: &str = include_str!("fixtures/firebase_test_jwks.json");

fn sign(kid: &str, claims: serde_json::Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY).expect("fixture key");
    encode(&header, &claims, &key).expect("sign token")
}

fn id_token(audience: &str) -> String {
    signed_with(KID, audience)
}

fn signed_with(kid: &str, audience: &str) -> String {
    let now = get_current_timestamp();
    sign(
        kid,
        json!({
            "sub": "firebase-uid",
            "email": "player@example.com",
            "aud": audience,
            "iss": format!("https://securetoken.google.com/{}", audience),
            "iat": now,
            "exp": now + 3600,
        }),
    )
}

async fn key_server(expected_fetches: u64) -> MockServer {
    serve_keys(ResponseTemplate::new(200), expected_fetches).await
}

async fn key_server_with_max_age(max_age: u64, expected_fetches: u64) -> MockServer {
    let response = ResponseTemplate::new(200)
        .insert_header("Cache-Control", format!("public, max-age={}", max_age).as_str());
    serve_keys(response, expected_fetches).await
}

async fn serve_keys(response: ResponseTemplate, expected_fetches: u64) -> MockServer {
    let server = MockServer::start().await;
    let jwks: serde_json::Value = serde_json::from_str(JWKS).expect("fixture jwks");
    Mock::given(method("GET"))
        .and(path("/keys"))
        .respond_with(response.set_body_json(jwks))
        .expect(expected_fetches)
        .mount(&server)
        .await;
    server
}

fn verifier(server: &MockServer) -> FirebaseVerifier {
    FirebaseVerifier::new(PROJECT_ID).with_jwks_url(format!("{}/keys", server.uri()))
}

#[tokio::test]
async fn test_valid_token_yields_principal() {
    let server = key_server(1).await;
    let verifier = verifier(&server);

    let principal = verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap();
    assert_eq!(
        principal,
        Principal::new("firebase-uid", Some("player@example.com".to_string()))
    );
}

#[tokio::test]
async fn test_keys_are_cached() {
    let server = key_server(1).await;
    let verifier = verifier(&server);

    for _ in 0..3 {
        verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap();
    }
}

#[tokio::test]
async fn test_wrong_audience_rejected() {
    let server = key_server(1).await;
    let verifier = verifier(&server);

    let result = verifier.verify_id_token(&id_token("someone-elses-project")).await;
    assert_matches!(result, Err(IdentityError::InvalidToken(_)));
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let server = key_server(1).await;
    let verifier = verifier(&server);
    let now = get_current_timestamp();
    let token = sign(
        KID,
        json!({
            "sub": "firebase-uid",
            "aud": PROJECT_ID,
            "iss": format!("https://securetoken.google.com/{}", PROJECT_ID),
            "iat": now - 7200,
            "exp": now - 3600,
        }),
    );

    let result = verifier.verify_id_token(&token).await;
    assert_matches!(result, Err(IdentityError::InvalidToken(_)));
}

#[tokio::test]
async fn test_unknown_kid_rejected() {
    // Refetched once on the miss
    let server = key_server(1).await;
    let verifier = verifier(&server);
    let now = get_current_timestamp();
    let token = sign(
        "rotated-away",
        json!({
            "sub": "firebase-uid",
            "aud": PROJECT_ID,
            "iss": format!("https://securetoken.google.com/{}", PROJECT_ID),
            "exp": now + 3600,
        }),
    );

    let result = verifier.verify_id_token(&token).await;
    assert_matches!(result, Err(IdentityError::UnknownKey(kid)) if kid == "rotated-away");
}

#[tokio::test]
async fn test_unknown_kids_reuse_recent_keys() {
    let server = key_server(1).await;
    let verifier = verifier(&server);

    for i in 0..20 {
        let kid = format!("bogus-{}", i);
        let result = verifier.verify_id_token(&signed_with(&kid, PROJECT_ID)).await;
        assert_matches!(result, Err(IdentityError::UnknownKey(k)) if k == kid);
    }

    // Real keys still verify from the cache
    verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap();
}

#[tokio::test]
async fn test_unknown_kid_refetches_after_interval() {
    let server = key_server(2).await;
    let verifier = verifier(&server).with_min_refresh_interval(Duration::ZERO);

    for kid in ["bogus-a", "bogus-b"] {
        let result = verifier.verify_id_token(&signed_with(kid, PROJECT_ID)).await;
        assert_matches!(result, Err(IdentityError::UnknownKey(_)));
    }
}

#[tokio::test]
async fn test_max_age_overrides_fallback_ttl() {
    let server = key_server_with_max_age(3600, 1).await;
    let verifier = verifier(&server).with_cache_ttl(Duration::ZERO);

    for _ in 0..3 {
        verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap();
    }
}

#[tokio::test]
async fn test_zero_max_age_refetches_each_time() {
    let server = key_server_with_max_age(0, 2).await;
    let verifier = verifier(&server);

    for _ in 0..2 {
        verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap();
    }
}

#[tokio::test]
async fn test_key_endpoint_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keys"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let verifier = verifier(&server);

    let err = verifier.verify_id_token(&id_token(PROJECT_ID)).await.unwrap_err();
    assert_matches!(err, IdentityError::KeyFetch(_));
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_router_accepts_firebase_tokens() {
    let server = key_server(1).await;
    let state = AppState::new(
        Arc::new(MemoryMessageStore::new()),
        Arc::new(verifier(&server)),
        AdminAllowList::new(["player@example.com"]),
    );
    let app = TestServer::new(create_router(state, &ServerConfig::default())).unwrap();
    let token = id_token(PROJECT_ID);

    let response = app
        .post("/api/auth/google")
        .json(&json!({ "idToken": token }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .post("/api/messages")
        .add_header(header::AUTHORIZATION, auth_header(&token))
        .json(&json!({ "text": "from firebase" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .get("/api/messages")
        .add_header(header::AUTHORIZATION, auth_header(&token))
        .await;
    let messages: Vec<boardkit::shared::Message> = response.json();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, "firebase-uid");
}
