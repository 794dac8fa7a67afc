use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

/// Draw open toasts in the bottom-right corner, newest on top
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if state.toaster.is_empty() {
        return;
    }

    let mut dismissed = Vec::new();

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for toast in state.toaster.iter() {
                let text = styles::toast_text(toast.variant);
                styles::toast_frame(toast.variant).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&toast.title).strong().color(text));
                            if let Some(ref description) = toast.description {
                                ui.label(egui::RichText::new(description).color(text));
                            }
                        });
                        if ui.small_button("✕").clicked() {
                            dismissed.push(toast.id);
                        }
                    });
                });
                ui.add_space(8.0);
            }
        });

    for id in dismissed {
        state.toaster.dismiss(id);
    }
}
