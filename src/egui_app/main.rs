//! egui Native Desktop App - Main Entry Point
//!
//! Implements eframe::App for the todo manager: each frame drains finished
//! background work, then renders the top bar and the table view.

use eframe::egui;
use tododesk::egui_app::{views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TodoDesk",
        options,
        Box::new(|_cc| Ok(Box::new(TodoApp::default()))),
    )
}

/// Main application state
struct TodoApp {
    state: AppState,
}

impl Default for TodoApp {
    fn default() -> Self {
        let mut state = AppState::new();
        state.reload();
        Self { state }
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_load_result();
        self.state.check_save_result();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
