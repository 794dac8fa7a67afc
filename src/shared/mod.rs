//! Shared Module
//!
//! Types and data structures shared between the board server and the
//! desktop client. Everything here is plain serde data so that both sides
//! agree on the JSON wire format.

/// Message data structure
pub mod message;

/// Principal and sign-in types
pub mod principal;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use message::{Message, SendMessageRequest};
pub use principal::{GoogleSignInRequest, Principal};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
