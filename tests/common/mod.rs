//! Common test utilities and helpers
//!
//! - A board app wired to the in-memory store and shared-secret tokens
//! - Token and header helpers
//! - Error body assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

pub use assertions::*;
pub use auth_helpers::*;
