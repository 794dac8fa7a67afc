//! boardkit - Main Library
//!
//! boardkit is a small authenticated message board: a desktop client signs in
//! with an identity-provider token, posts short messages, and (for admins)
//! reads every message back. The client also hides a triple-click easter egg
//! that unlocks a temporary "special mode".
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - `Message`, `Principal`, request bodies
//!   - Shared error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server
//!   - Identity verification (Firebase ID tokens or shared-secret tokens)
//!   - Admin allow-list
//!   - Message persistence (PostgreSQL or in-memory)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Sign-in screen and message board
//!   - Easter-egg tracker and toast notifications
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum, sqlx, jsonwebtoken)
//!
//! # Usage
//!
//! ```rust,no_run
//! use boardkit::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
