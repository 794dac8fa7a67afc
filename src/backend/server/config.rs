/**
 * Server Configuration
 *
 * Configuration is assembled in two layers:
 *
 * 1. An optional TOML file named by `BOARDKIT_CONFIG`
 * 2. Environment variables, which override file values
 *
 * | Variable              | Field                 | Default    |
 * |-----------------------|-----------------------|------------|
 * | `SERVER_PORT`         | `port`                | `3000`     |
 * | `DATABASE_URL`        | `database_url`        | unset      |
 * | `ADMIN_EMAILS`        | `admin_emails`        | empty      |
 * | `FIREBASE_PROJECT_ID` | `firebase_project_id` | unset      |
 * | `AUTH_SHARED_SECRET`  | `auth_shared_secret`  | unset      |
 * | `CORS_ORIGINS`        | `cors_origins`        | empty      |
 * | `STATIC_DIR`          | `static_dir`          | `public`   |
 *
 * List-valued variables are comma separated.
 *
 * # Optional Services
 *
 * A missing or unreachable database is logged and the server falls back to
 * the in-memory message store, the same way the rest of the server tolerates
 * absent services.
 */

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::{FirebaseVerifier, IdentityVerifier, SharedSecretVerifier};
use crate::backend::messaging::{MemoryMessageStore, MessageStore, PgMessageStore};
use crate::shared::ConfigError;

/// Environment variable naming the optional TOML config file
pub const CONFIG_FILE_ENV: &str = "BOARDKIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub admin_emails: Vec<String>,
    pub firebase_project_id: Option<String>,
    pub auth_shared_secret: Option<String>,
    pub cors_origins: Vec<String>,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: None,
            admin_emails: Vec::new(),
            firebase_project_id: None,
            auth_shared_secret: None,
            cors_origins: Vec::new(),
            static_dir: "public".to_string(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl ServerConfig {
    /// Load configuration from the optional file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_file(&path)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::File { message, .. } => ConfigError::File {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::File {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a key lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                message: format!("{}", e),
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(emails) = lookup("ADMIN_EMAILS") {
            self.admin_emails = split_list(&emails);
        }
        if let Some(project_id) = lookup("FIREBASE_PROJECT_ID") {
            self.firebase_project_id = Some(project_id);
        }
        if let Some(secret) = lookup("AUTH_SHARED_SECRET") {
            self.auth_shared_secret = Some(secret);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = split_list(&origins);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = dir;
        }
        Ok(())
    }

    /// Build the identity verifier
    ///
    /// A Firebase project wins over a shared secret; with neither the server
    /// refuses to start.
    pub fn identity_verifier(&self) -> Result<Arc<dyn IdentityVerifier>, ConfigError> {
        if let Some(project_id) = &self.firebase_project_id {
            tracing::info!("Verifying Firebase ID tokens for project {}", project_id);
            return Ok(Arc::new(FirebaseVerifier::new(project_id.clone())));
        }
        if let Some(secret) = &self.auth_shared_secret {
            tracing::warn!("FIREBASE_PROJECT_ID not set. Verifying shared-secret tokens instead.");
            return Ok(Arc::new(SharedSecretVerifier::new(secret)));
        }
        Err(ConfigError::MissingValue("FIREBASE_PROJECT_ID or AUTH_SHARED_SECRET"))
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Connects to `database_url`
/// 2. Runs database migrations
///
/// Returns `None` when no URL is configured or the connection fails; errors
/// are logged and do not prevent startup.
pub async fn load_database(config: &ServerConfig) -> Option<PgPool> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Messages will be kept in memory.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Messages will be kept in memory.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Pick the message store: Postgres when available, memory otherwise
pub async fn load_message_store(config: &ServerConfig) -> Arc<dyn MessageStore> {
    match load_database(config).await {
        Some(pool) => Arc::new(PgMessageStore::new(pool)),
        None => Arc::new(MemoryMessageStore::new()),
    }
}
