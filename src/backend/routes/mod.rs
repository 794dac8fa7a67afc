//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and tracing layers
//! └── api_routes.rs   - API endpoints and the auth middleware boundary
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/google` - Sign-in exchange (public)
//! - `GET /api/me` - Current principal
//! - `POST /api/messages` - Append a message
//! - `GET /api/messages` - List messages (admin)
//! - `/static/*` - Frontend assets

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
