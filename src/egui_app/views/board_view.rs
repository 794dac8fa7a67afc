use std::time::Instant;

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            ui.vertical(|ui| {
                render_composer(ui, state);
                ui.add_space(16.0);
                render_messages(ui, state);
                ui.add_space(16.0);
                render_eggs(ui, state);
            });
        });
    });
}

fn render_composer(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new("New message").size(16.0).color(colors::TEXT_LIGHT));
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::multiline(&mut state.message_input)
                .desired_rows(3)
                .desired_width(480.0)
                .hint_text("Say something")
                .text_color(colors::TEXT_DARK),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!state.sending, egui::Button::new("Send")).clicked() {
                state.send_message(Instant::now());
            }
            if state.sending {
                ui.spinner();
            }
        });
    });
}

fn render_messages(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("All messages").size(16.0).color(colors::TEXT_LIGHT));
            ui.label(egui::RichText::new("(admins only)").color(colors::TEXT_SECONDARY));
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!state.loading_messages, egui::Button::new("Load"))
                .clicked()
            {
                state.refresh_messages();
            }
            if state.loading_messages {
                ui.spinner();
            }
        });

        if state.messages.is_empty() {
            return;
        }

        ui.add_space(8.0);
        egui::Grid::new("messages_grid")
            .striped(true)
            .num_columns(4)
            .show(ui, |ui| {
                for message in &state.messages {
                    ui.colored_label(colors::TIMESTAMP, format!("#{}", message.id));
                    ui.colored_label(colors::TEXT_SECONDARY, message.sender.as_str());
                    ui.colored_label(colors::TEXT_LIGHT, message.text.as_str());
                    ui.colored_label(
                        colors::TIMESTAMP,
                        message.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    );
                    ui.end_row();
                }
            });
    });
}

fn render_eggs(ui: &mut egui::Ui, state: &AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(egui::RichText::new("Easter eggs").size(16.0).color(colors::TEXT_LIGHT));
        ui.add_space(8.0);
        for egg in state.eggs.catalog().iter() {
            ui.horizontal(|ui| {
                if egg.is_unlocked() {
                    ui.colored_label(colors::EGG_BADGE, egg.icon.as_str());
                    ui.colored_label(colors::TEXT_LIGHT, egg.name.as_str());
                } else {
                    ui.colored_label(colors::TEXT_SECONDARY, "🔒 ???");
                }
            });
        }
    });
}
