//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (file, env, database, identity)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::load()` reads the optional TOML
//!    file and the environment
//! 2. **Services**: identity verifier, message store, admin allow-list
//! 3. **Router Creation**: routes, auth middleware, CORS, tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::AppState;
pub use config::ServerConfig;
pub use init::create_app;
