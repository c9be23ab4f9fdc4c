use eframe::egui;

use crate::egui_app::state::AppState;

pub mod action_bar;
pub mod todos_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(egui::Frame::default().inner_margin(egui::Margin::symmetric(12, 8)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("📝 TodoDesk").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.todos.is_saving() {
                        ui.colored_label(
                            egui::Color32::from_rgb(255, 193, 7),
                            format!("🔄 Saving {} change(s)…", state.todos.dirty_count()),
                        );
                    } else if state.todos.dirty_count() > 0 {
                        ui.colored_label(
                            egui::Color32::from_rgb(255, 193, 7),
                            format!("{} unsaved", state.todos.dirty_count()),
                        );
                    }

                    if state.pagination.total_count() > 0 {
                        ui.label(format!("{} todos", state.pagination.total_count()));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(error) = state.todos.load_error.clone() {
            render_load_error(ui, state, &error);
            ui.separator();
        }

        if state.todos.rows().is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                if state.todos.is_loading {
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.add_space(8.0);
                    ui.label("Loading todos...");
                } else if state.todos.load_error.is_none() {
                    ui.label("No todos found");
                }
            });
            return;
        }

        action_bar::render(ui, state);
        todos_view::render(ui, state);
    });
}

/// Page-level load failure with an explicit retry. The previous row set, if
/// any, stays visible below.
fn render_load_error(ui: &mut egui::Ui, state: &mut AppState, error: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.colored_label(
            egui::Color32::from_rgb(220, 53, 69),
            "Failed to load todos",
        );
        ui.label(error);
        if ui.button("Try Again").clicked() {
            state.reload();
        }
        ui.add_space(8.0);
    });
}
