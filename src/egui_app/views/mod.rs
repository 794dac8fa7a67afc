use std::time::Instant;

use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod board_view;
pub mod toast_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // The logo is the easter-egg target
                let logo = egui::Label::new(
                    egui::RichText::new("📋 boardkit")
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT_LIGHT),
                )
                .sense(egui::Sense::click());
                if ui.add(logo).clicked() {
                    state.click_logo(Instant::now());
                }

                if state.eggs.special_mode() {
                    ui.colored_label(colors::EGG_BADGE, "✨ special mode");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.auth_state.authenticated {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(name) = state.auth_state.display_name() {
                            ui.colored_label(colors::TEXT_LIGHT, name);
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(styles::background(state.eggs.special_mode()))
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Board => board_view::render(ui, state),
        });
}

pub fn render_toasts(ctx: &egui::Context, state: &mut AppState) {
    toast_view::render(ctx, state);
}
