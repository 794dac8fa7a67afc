//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`sign_in_with_google`** - POST /api/auth/google - exchange an ID token for the principal
//! - **`get_me`** - GET /api/me - principal resolved by the auth middleware

/// Sign-in exchange handler
pub mod google;

/// Get current principal handler
pub mod me;

pub use google::sign_in_with_google;
pub use me::get_me;
