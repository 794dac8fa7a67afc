//! egui Native Desktop App Module
//!
//! Desktop client for the board server, built with egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Server URL and the session's bearer token
//! - **`auth`** - Sign-in state and auth API calls
//! - **`board_api`** - Message API calls
//! - **`types`** - View enum and worker-thread results
//! - **`easter_egg`** - Triple-click tracker and egg catalogue
//! - **`toast`** - Toast notification queue
//! - **`state`** - Session state passed to every view
//! - **`views`** - egui rendering
//! - **`theme`** - Colors and frame styles
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point
//! ├── config.rs       - Configuration management
//! ├── auth.rs         - Sign-in state and functions
//! ├── board_api.rs    - Message board client
//! ├── types.rs        - Shared types
//! ├── toast.rs        - Toast queue
//! ├── easter_egg/     - Egg catalogue and tracker
//! ├── state/          - Session state
//! ├── views/          - Sign-in, board and toast views
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin boardkit_app
//! ```

pub mod config;
pub mod auth;
pub mod board_api;
pub mod types;
pub mod easter_egg;
pub mod toast;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::{sign_in_with_google, AuthState};
pub use board_api::BoardApiClient;
pub use easter_egg::{EasterEggTracker, EggNotification, EggTimings};
pub use toast::{Toast, ToastVariant, Toaster};
pub use types::{ApiEvent, AppView};
pub use state::AppState;
