//! Action Bar
//!
//! Save/Clear controls with the unsaved-changes badge and the outcome line
//! of the most recent save batch.

use eframe::egui;

use crate::egui_app::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let dirty_count = state.todos.dirty_count();
    let is_saving = state.todos.is_saving();

    if let Some(summary) = state.last_save_summary {
        let text = if summary.failed == 0 {
            format!("Successfully updated {} todo(s).", summary.succeeded)
        } else if summary.succeeded > 0 {
            format!(
                "{} saved, {} failed. Check the error badges.",
                summary.succeeded, summary.failed
            )
        } else {
            format!("Failed to save {} todo(s). Please try again.", summary.failed)
        };
        let color = if summary.failed == 0 {
            egui::Color32::from_rgb(40, 167, 69)
        } else {
            egui::Color32::from_rgb(220, 53, 69)
        };
        ui.colored_label(color, text);
    }

    if dirty_count == 0 && !is_saving {
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Unsaved:");
        ui.colored_label(egui::Color32::from_rgb(255, 193, 7), dirty_count.to_string());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save_clicked = ui
                .add_enabled(!is_saving, egui::Button::new("Save Changes"))
                .clicked();
            if is_saving {
                ui.add(egui::Spinner::new().size(14.0));
            }
            let clear_clicked = ui
                .add_enabled(!is_saving, egui::Button::new("Clear"))
                .clicked();

            if save_clicked {
                state.save_changes();
            }
            if clear_clicked {
                state.clear_changes();
            }
        });
    });
    ui.separator();
}
