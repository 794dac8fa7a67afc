/**
 * Authentication Module
 *
 * Sign-in state and the HTTP client function for the sign-in exchange.
 */

use crate::egui_app::config::Config;
use crate::shared::{GoogleSignInRequest, Principal};
use reqwest::{Client, Response};
use tokio::runtime::Runtime;

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub principal: Option<Principal>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    /// Label shown for the signed-in principal
    pub fn display_name(&self) -> Option<&str> {
        self.principal
            .as_ref()
            .map(|p| p.email.as_deref().unwrap_or(p.uid.as_str()))
    }
}

/// Turn a non-success response into a readable message
///
/// The server answers errors with `{ "error": ..., "status": ... }`; fall back
/// to the raw body when it does not.
pub(crate) async fn failure_message(action: &str, response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(body);
    format!("{} failed: {} - {}", action, status, detail)
}

/// Exchange an identity-provider ID token for the server's view of the principal
pub fn sign_in_with_google(config: &Config, id_token: String) -> Result<Principal, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/google");

    let request = GoogleSignInRequest { id_token };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(failure_message("Sign-in", response).await);
        }

        response
            .json::<Principal>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}
