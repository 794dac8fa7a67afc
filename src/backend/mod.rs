//! Backend Module
//!
//! Server-side code of the board: an Axum HTTP service that authenticates
//! callers with identity-provider tokens and persists chat-style messages.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Identity verification, admin allow-list, auth handlers
//! - **`middleware`** - Bearer-token authentication and extractors
//! - **`messaging`** - Message store and message handlers
//! - **`error`** - Backend error types
//!
//! # Request Flow
//!
//! ```text
//! request ─► TraceLayer ─► CorsLayer ─► auth_middleware ─► handler ─► MessageStore
//!                                        │ (401 on missing/invalid token)
//!                                        └─► AdminUser extractor (403 if not admin)
//! ```
//!
//! Each request is independent. The only shared state is the connection
//! pool (or in-memory store) and the identity provider's key cache.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Identity verification and authentication endpoints
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Message board persistence and handlers
pub mod messaging;

pub use server::{create_app, AppState, ServerConfig};
pub use error::BackendError;
pub use messaging::{MemoryMessageStore, MessageStore, PgMessageStore};
