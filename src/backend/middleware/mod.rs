//! Middleware Module
//!
//! HTTP middleware and extractors applied before handlers run.
//!
//! - **`auth`** - bearer-token authentication, `AuthUser` and `AdminUser` extractors

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AdminUser, AuthUser};
