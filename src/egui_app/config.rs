use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Environment variable naming the board server
pub const CLIENT_API_URL_ENV: &str = "CLIENT_API_URL";

/// Client configuration: server location plus the session's bearer token.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let app = std::env::var(CLIENT_API_URL_ENV)
            .ok()
            .and_then(|url| match AppConfig::builder().server_url(url).build() {
                Ok(app) => Some(app),
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", CLIENT_API_URL_ENV, e);
                    None
                }
            })
            .unwrap_or_default();
        Self { app, token: None }
    }
}

impl Config {
    /// Create a configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
