use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 260.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📋 boardkit")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new("Sign in with your Google ID token")
                    .size(18.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            styles::card_frame().show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.add_sized(
                    [400.0, 28.0],
                    egui::TextEdit::singleline(&mut state.id_token_input)
                        .password(true)
                        .hint_text("ID token")
                        .text_color(colors::TEXT_DARK),
                );
                ui.add_space(12.0);

                let sign_in = egui::Button::new(
                    egui::RichText::new("Sign in").color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT)
                .min_size(egui::vec2(120.0, 32.0));

                if ui.add_enabled(!state.auth_state.loading, sign_in).clicked() {
                    state.auth_state.clear_error();
                    state.handle_sign_in();
                }
            });

            if state.auth_state.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
