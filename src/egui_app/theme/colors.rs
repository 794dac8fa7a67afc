//! Color Constants for the Board Theme
//!
//! Warm brown/tan palette. Special mode swaps the main background for a
//! brighter gold so the easter egg is visible at a glance.

use egui::Color32;

/// Main background - Deep brown
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Main background while special mode is on - Gold
pub const BG_SPECIAL: Color32 = Color32::from_rgb(0x6B, 0x4E, 0x16);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Card background for the composer and message list
pub const CARD_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds - Cream
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xB8, 0xA4, 0x92);

/// Timestamp text color
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Accent color for primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Hover state for primary buttons
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x6D, 0x4B, 0x3D);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Default toast background
pub const TOAST_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Destructive toast background
pub const TOAST_DESTRUCTIVE_BG: Color32 = Color32::from_rgb(0x8E, 0x2C, 0x2C);

/// Unlocked egg badge
pub const EGG_BADGE: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);
