//! Todos Table View
//!
//! Renders the todo rows with selection and completion controls, sortable
//! column headers, and the pagination strip. All user intents are collected
//! while the table is drawn and applied to the state afterwards, keeping the
//! immediate-mode pass free of aliasing on `AppState`.

use eframe::egui;

use crate::egui_app::state::{AppState, PageItem, PAGE_SIZE_OPTIONS};
use crate::shared::todo::SortOrder;

/// A user action recorded during the render pass.
enum Intent {
    ToggleCompleted(u64),
    ToggleSelection(u64),
    ToggleSelectAll,
    Sort(&'static str),
    SetPage(u32),
    SetPageSize(u32),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut intents: Vec<Intent> = Vec::new();

    render_table(ui, state, &mut intents);
    ui.add_space(8.0);
    render_pagination(ui, state, &mut intents);

    for intent in intents {
        match intent {
            Intent::ToggleCompleted(id) => state.toggle_completed(id),
            Intent::ToggleSelection(id) => state.toggle_selection(id),
            Intent::ToggleSelectAll => state.toggle_select_all(),
            Intent::Sort(field) => state.toggle_sort(field),
            Intent::SetPage(page) => state.set_page(page),
            Intent::SetPageSize(size) => state.set_page_size(size),
        }
    }
}

fn sort_label(state: &AppState, field: &str, title: &str) -> String {
    if state.pagination.sort_field() == Some(field) {
        match state.pagination.sort_order() {
            SortOrder::Asc => format!("{} ⬆", title),
            SortOrder::Desc => format!("{} ⬇", title),
        }
    } else {
        title.to_string()
    }
}

fn render_table(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("todos_grid")
            .striped(true)
            .num_columns(5)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                // Header row.
                let mut all_selected = state.todos.is_all_selected();
                let select_all_label = if state.todos.is_indeterminate() { "•" } else { "" };
                if ui
                    .checkbox(&mut all_selected, select_all_label)
                    .on_hover_text("Select all rows")
                    .clicked()
                {
                    intents.push(Intent::ToggleSelectAll);
                }
                if ui.button(sort_label(state, "completed", "Status")).clicked() {
                    intents.push(Intent::Sort("completed"));
                }
                if ui.button(sort_label(state, "id", "ID")).clicked() {
                    intents.push(Intent::Sort("id"));
                }
                if ui.button(sort_label(state, "title", "Title")).clicked() {
                    intents.push(Intent::Sort("title"));
                }
                ui.label("");
                ui.end_row();

                for row in state.todos.rows() {
                    let id = row.id();

                    let mut selected = row.is_selected;
                    if ui.checkbox(&mut selected, "").clicked() {
                        intents.push(Intent::ToggleSelection(id));
                    }

                    if row.is_saving {
                        ui.add(egui::Spinner::new().size(14.0));
                    } else {
                        let mut completed = row.todo.completed;
                        let label = if completed { "Done" } else { "Pending" };
                        let response = ui.add_enabled(
                            !row.todo.completed,
                            egui::Checkbox::new(&mut completed, label),
                        );
                        if response.clicked() {
                            intents.push(Intent::ToggleCompleted(id));
                        }
                    }

                    ui.label(format!("#{}", id));
                    ui.label(&row.todo.title);

                    ui.horizontal(|ui| {
                        if row.is_dirty {
                            ui.colored_label(egui::Color32::from_rgb(255, 193, 7), "Modified");
                        }
                        if let Some(error) = &row.save_error {
                            ui.colored_label(egui::Color32::from_rgb(220, 53, 69), "Error")
                                .on_hover_text(error);
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

fn render_pagination(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<Intent>) {
    let page = state.pagination.page();
    let page_size = state.pagination.page_size();
    let total_pages = state.pagination.total_pages();
    let enabled = !state.todos.is_loading;

    ui.horizontal(|ui| {
        let start = (page as u64 - 1) * page_size as u64 + 1;
        let end = start + state.todos.rows().len() as u64 - 1;
        ui.label(format!(
            "Showing {}-{} of {}",
            start,
            end,
            state.pagination.total_count()
        ));

        egui::ComboBox::from_id_salt("page_size")
            .selected_text(format!("{} / page", page_size))
            .show_ui(ui, |ui| {
                for size in PAGE_SIZE_OPTIONS {
                    if ui
                        .selectable_label(size == page_size, size.to_string())
                        .clicked()
                    {
                        intents.push(Intent::SetPageSize(size));
                    }
                }
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(enabled && page < total_pages, egui::Button::new("▶"))
                .clicked()
            {
                intents.push(Intent::SetPage(page + 1));
            }

            let items = state.pagination.page_numbers();
            for item in items.iter().rev() {
                match item {
                    PageItem::Page(p) => {
                        let mut button = egui::Button::new(p.to_string());
                        if *p == page {
                            button = button.fill(ui.visuals().selection.bg_fill);
                        }
                        if ui.add_enabled(enabled, button).clicked() {
                            intents.push(Intent::SetPage(*p));
                        }
                    }
                    PageItem::Ellipsis => {
                        ui.label("…");
                    }
                }
            }

            if ui
                .add_enabled(enabled && page > 1, egui::Button::new("◀"))
                .clicked()
            {
                intents.push(Intent::SetPage(page - 1));
            }
        });
    });
}
