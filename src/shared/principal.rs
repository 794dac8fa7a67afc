//! Principal and sign-in wire types
//!
//! A principal is the identity resolved from an identity-provider token.
//! It is never stored by this system; the server derives one per request.

use serde::{Deserialize, Serialize};

/// Authenticated identity returned by `POST /api/auth/google` and `GET /api/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// External user id assigned by the identity provider
    pub uid: String,
    /// E-mail claim, absent for providers that do not supply one
    pub email: Option<String>,
}

impl Principal {
    pub fn new(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
        }
    }
}

/// Body of `POST /api/auth/google`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInRequest {
    /// Identity-provider ID token obtained by the client
    pub id_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_uses_camel_case() {
        let request: GoogleSignInRequest =
            serde_json::from_str(r#"{"idToken":"abc"}"#).unwrap();
        assert_eq!(request.id_token, "abc");
    }

    #[test]
    fn test_principal_without_email_serializes_null() {
        let principal = Principal::new("u1", None);
        let json = serde_json::to_value(&principal).unwrap();
        assert_eq!(json["uid"], "u1");
        assert!(json["email"].is_null());
    }
}
