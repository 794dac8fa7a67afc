//! Theme Styling Functions
//!
//! Helpers that apply the palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::toast::ToastVariant;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.inactive.bg_fill = colors::ACCENT;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.active.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.selection.bg_fill = colors::CARD_BORDER;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Main background, brighter while special mode is on
pub fn background(special_mode: bool) -> Color32 {
    if special_mode {
        colors::BG_SPECIAL
    } else {
        colors::BG_DARK
    }
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for content cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame for a single toast
pub fn toast_frame(variant: ToastVariant) -> egui::Frame {
    let fill = match variant {
        ToastVariant::Default => colors::TOAST_BG,
        ToastVariant::Destructive => colors::TOAST_DESTRUCTIVE_BG,
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Text color that reads on a toast of the given variant
pub fn toast_text(variant: ToastVariant) -> Color32 {
    match variant {
        ToastVariant::Default => colors::TEXT_DARK,
        ToastVariant::Destructive => colors::TEXT_LIGHT,
    }
}
