/**
 * boardkit Desktop Client - Main Entry Point
 *
 * Implements eframe::App on top of the session `AppState`: sign-in screen,
 * message board and toasts, with timers advanced once per frame.
 */
use std::time::Instant;

use boardkit::egui_app::{theme, views, AppState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "boardkit",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BoardApp::default()))
        }),
    )
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "boardkit=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();
}

/// Main application state
#[derive(Default)]
struct BoardApp {
    state: AppState,
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.tick(now);

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_toasts(ctx, &mut self.state);

        // Results from worker threads arrive without input events
        let busy = self.state.auth_state.loading || self.state.sending || self.state.loading_messages;
        if busy {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else if let Some(deadline) = self.state.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
