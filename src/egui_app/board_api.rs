//! Message Board API Client
//!
//! Blocking wrappers around the message endpoints. Calls are made from a
//! worker thread, never from the UI thread.

use crate::egui_app::auth::failure_message;
use crate::egui_app::config::Config;
use crate::shared::{Message, SendMessageRequest};
use reqwest::{Client, StatusCode};
use tokio::runtime::Runtime;

/// Message board API client
pub struct BoardApiClient {
    config: Config,
    client: Client,
}

impl BoardApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Post a message as the signed-in principal
    pub fn post_message(&self, text: &str) -> Result<(), String> {
        let request = SendMessageRequest::new(text);
        request.validate().map_err(|e| e.to_string())?;

        let url = self.config.api_url("/api/messages");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", token))
                .json(&request)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                return Err(failure_message("Send message", response).await);
            }
            Ok(())
        })
    }

    /// List every message (admin only)
    pub fn list_messages(&self) -> Result<Vec<Message>, String> {
        let url = self.config.api_url("/api/messages");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", token))
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            match response.status() {
                status if status.is_success() => response
                    .json::<Vec<Message>>()
                    .await
                    .map_err(|e| format!("Failed to parse response: {}", e)),
                StatusCode::FORBIDDEN => Err("Admin access required".to_string()),
                _ => Err(failure_message("List messages", response).await),
            }
        })
    }
}
