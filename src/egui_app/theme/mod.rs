//! Theme Module
//!
//! Color scheme and styling helpers for the board client.
//!
//! - Color constants for the brown/tan theme
//! - Frame builders for the top bar, cards and toasts

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
