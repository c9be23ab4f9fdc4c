//! Row State Reconciliation
//!
//! Tracks server truth vs. local edits for the currently loaded page of
//! todos. Each row carries the last server-confirmed completion value as its
//! baseline; a row is dirty exactly when its local value differs from that
//! baseline. Saves are batched: dirty rows are marked in-flight before the
//! requests go out, then reconciled one by one against the per-item results.
//!
//! ## State machine per row
//!
//! `Clean -> Dirty -> Saving -> (Clean | Dirty with error)`
//!
//! - Completion is one-way: a row whose `completed` is already `true`
//!   cannot be toggled back.
//! - Toggling a row that is in-flight is a no-op.
//! - A failed save leaves the row dirty with its error attached, so the
//!   user can retry.

use crate::shared::todo::{Todo, TodoUpdate, UpdateResult};

/// One visible todo row with its local edit-tracking state.
#[derive(Debug, Clone)]
pub struct TodoRow {
    pub todo: Todo,
    /// Completion value as last confirmed by the server
    pub original_completed: bool,
    /// UI selection flag; carries no save semantics
    pub is_selected: bool,
    /// Whether the local completion value differs from the baseline
    pub is_dirty: bool,
    /// Whether an update request for this row is in flight
    pub is_saving: bool,
    /// Error message from the most recent failed save, if any
    pub save_error: Option<String>,
}

impl TodoRow {
    fn from_todo(todo: Todo) -> Self {
        let original_completed = todo.completed;
        Self {
            todo,
            original_completed,
            is_selected: false,
            is_dirty: false,
            is_saving: false,
            save_error: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.todo.id
    }
}

/// State for the currently loaded page of todo rows.
///
/// The row set is replaced wholesale on every successful load; individual
/// rows are mutated in place by the toggle/save/clear transitions. Derived
/// counts are computed on read, never stored.
#[derive(Debug, Default)]
pub struct TodosState {
    rows: Vec<TodoRow>,
    /// Whether a list request is in flight
    pub is_loading: bool,
    /// Page-level error from the most recent failed load
    pub load_error: Option<String>,
    is_saving: bool,
}

impl TodosState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    /// Whether a save batch is outstanding
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    /// Replace the row set with a freshly fetched page.
    ///
    /// Every row enters clean: the baseline is the fetched completion value
    /// and all flags are reset. Local edits from the previous page are
    /// discarded, not merged.
    pub fn set_rows(&mut self, todos: Vec<Todo>) {
        self.rows = todos.into_iter().map(TodoRow::from_todo).collect();
        self.is_loading = false;
        self.load_error = None;
        tracing::debug!("loaded {} todo rows", self.rows.len());
    }

    /// Toggle the selection flag for one row. Pure UI bookkeeping.
    pub fn toggle_selection(&mut self, id: u64) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) {
            row.is_selected = !row.is_selected;
        }
    }

    /// Select every row, or deselect all if every row is already selected.
    pub fn toggle_select_all(&mut self) {
        let all_selected = self.rows.iter().all(|r| r.is_selected);
        for row in &mut self.rows {
            row.is_selected = !all_selected;
        }
    }

    /// Toggle the local completion value for one row.
    ///
    /// No-op if the row is already completed (completion is one-way) or has
    /// a save in flight. Any stale save error is cleared by the edit.
    pub fn toggle_completed(&mut self, id: u64) {
        let Some(row) = self.rows.iter_mut().find(|r| r.id() == id) else {
            return;
        };
        if row.todo.completed || row.is_saving {
            return;
        }

        row.todo.completed = !row.todo.completed;
        row.is_dirty = row.todo.completed != row.original_completed;
        row.save_error = None;
    }

    /// Collect every dirty row and mark it in-flight.
    ///
    /// Returns the update payloads to submit, one per dirty row. With no
    /// dirty rows this returns an empty list and leaves all state untouched,
    /// so callers can skip the network round trip entirely. The in-flight
    /// flags are set before any request is issued, which is what keeps a
    /// concurrent toggle from racing the save.
    pub fn begin_save(&mut self) -> Vec<(u64, TodoUpdate)> {
        let updates: Vec<(u64, TodoUpdate)> = self
            .rows
            .iter()
            .filter(|r| r.is_dirty)
            .map(|r| {
                (
                    r.id(),
                    TodoUpdate {
                        completed: r.todo.completed,
                    },
                )
            })
            .collect();

        if updates.is_empty() {
            return updates;
        }

        for row in self.rows.iter_mut().filter(|r| r.is_dirty) {
            row.is_saving = true;
            row.save_error = None;
        }
        self.is_saving = true;
        tracing::debug!("saving {} dirty rows", updates.len());

        updates
    }

    /// Reconcile the row set against the per-item results of a save batch.
    ///
    /// A successful row takes its local value as the new server baseline and
    /// returns to clean. A failed row keeps its local value, stays dirty,
    /// and records the failure message. Rows without a matching result are
    /// untouched.
    pub fn apply_save_results(&mut self, results: &[UpdateResult]) {
        for row in &mut self.rows {
            let Some(result) = results.iter().find(|r| r.id == row.id()) else {
                continue;
            };

            if result.success {
                row.original_completed = row.todo.completed;
                row.is_dirty = false;
                row.is_saving = false;
                row.save_error = None;
            } else {
                row.is_saving = false;
                row.save_error = Some(
                    result
                        .error
                        .clone()
                        .unwrap_or_else(|| "Save failed".to_string()),
                );
            }
        }
        self.is_saving = false;

        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            tracing::warn!("save batch finished with {} failed rows", failed);
        }
    }

    /// Discard all local edits and clear selection.
    ///
    /// Every row returns to its server baseline with selection, dirty flag,
    /// and save error reset. In-flight flags are not touched; the action is
    /// only reachable while no save is outstanding.
    pub fn clear_changes(&mut self) {
        for row in &mut self.rows {
            row.todo.completed = row.original_completed;
            row.is_selected = false;
            row.is_dirty = false;
            row.save_error = None;
        }
    }

    // Derived values, computed on read.

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_selected).count()
    }

    pub fn dirty_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_dirty).count()
    }

    pub fn is_all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.is_selected)
    }

    pub fn is_indeterminate(&self) -> bool {
        self.selected_count() > 0 && !self.is_all_selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            user_id: 1,
            id,
            title: format!("todo {}", id),
            completed,
        }
    }

    fn loaded_state() -> TodosState {
        let mut state = TodosState::new();
        state.set_rows(vec![todo(1, false), todo(2, false), todo(3, true)]);
        state
    }

    fn assert_dirty_invariant(state: &TodosState) {
        for row in state.rows() {
            assert_eq!(
                row.is_dirty,
                row.todo.completed != row.original_completed,
                "dirty flag out of sync for row {}",
                row.id()
            );
        }
    }

    #[test]
    fn test_rows_enter_clean_on_load() {
        let state = loaded_state();
        assert_eq!(state.rows().len(), 3);
        for row in state.rows() {
            assert_eq!(row.original_completed, row.todo.completed);
            assert!(!row.is_selected);
            assert!(!row.is_dirty);
            assert!(!row.is_saving);
            assert!(row.save_error.is_none());
        }
        assert!(!state.is_loading);
        assert!(state.load_error.is_none());
    }

    #[test]
    fn test_set_rows_replaces_wholesale() {
        let mut state = loaded_state();
        state.toggle_completed(1);
        state.toggle_selection(2);
        assert_eq!(state.dirty_count(), 1);

        state.set_rows(vec![todo(10, false)]);
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.dirty_count(), 0);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_toggle_completed_marks_dirty() {
        let mut state = loaded_state();
        state.toggle_completed(1);

        let row = &state.rows()[0];
        assert!(row.todo.completed);
        assert!(row.is_dirty);
        assert_eq!(state.dirty_count(), 1);
        assert_dirty_invariant(&state);
    }

    #[test]
    fn test_completed_rows_cannot_be_toggled_back() {
        let mut state = loaded_state();
        // Row 3 arrived already completed.
        state.toggle_completed(3);

        let row = &state.rows()[2];
        assert!(row.todo.completed);
        assert!(!row.is_dirty);
        assert!(row.save_error.is_none());
        assert_dirty_invariant(&state);
    }

    #[test]
    fn test_toggle_is_noop_while_saving() {
        let mut state = loaded_state();
        state.rows[0].is_saving = true;

        state.toggle_completed(1);
        let row = &state.rows()[0];
        assert!(!row.todo.completed);
        assert!(!row.is_dirty);
    }

    #[test]
    fn test_toggle_clears_stale_save_error() {
        let mut state = loaded_state();
        state.rows[0].save_error = Some("Network error".to_string());

        state.toggle_completed(1);
        assert!(state.rows()[0].save_error.is_none());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = loaded_state();
        state.toggle_completed(999);
        assert_eq!(state.dirty_count(), 0);
    }

    #[test]
    fn test_begin_save_with_no_dirty_rows_returns_empty() {
        let mut state = loaded_state();
        let updates = state.begin_save();
        assert!(updates.is_empty());
        assert!(!state.is_saving());
        for row in state.rows() {
            assert!(!row.is_saving);
        }
    }

    #[test]
    fn test_begin_save_marks_dirty_rows_in_flight() {
        let mut state = loaded_state();
        state.toggle_completed(1);
        state.toggle_completed(2);
        state.rows[0].save_error = Some("stale".to_string());

        let updates = state.begin_save();
        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|(_, payload)| payload.completed));
        assert!(state.is_saving());

        assert!(state.rows()[0].is_saving);
        assert!(state.rows()[0].save_error.is_none());
        assert!(state.rows()[1].is_saving);
        // Clean row untouched.
        assert!(!state.rows()[2].is_saving);
    }

    #[test]
    fn test_partial_failure_reconciliation() {
        let mut state = TodosState::new();
        state.set_rows(vec![todo(1, false), todo(2, false), todo(3, false)]);
        state.toggle_completed(1);
        state.toggle_completed(2);
        state.toggle_completed(3);

        let updates = state.begin_save();
        assert_eq!(updates.len(), 3);

        let results = vec![
            UpdateResult::ok(1, todo(1, true)),
            UpdateResult::failed(2, "Request failed: 500 - Internal Server Error"),
            UpdateResult::ok(3, todo(3, true)),
        ];
        state.apply_save_results(&results);

        assert!(!state.is_saving());
        assert_eq!(state.dirty_count(), 1);

        let ok_row = &state.rows()[0];
        assert!(!ok_row.is_dirty);
        assert!(!ok_row.is_saving);
        assert!(ok_row.save_error.is_none());
        assert!(ok_row.original_completed);

        let failed_row = &state.rows()[1];
        assert!(failed_row.is_dirty);
        assert!(!failed_row.is_saving);
        assert_eq!(
            failed_row.save_error.as_deref(),
            Some("Request failed: 500 - Internal Server Error")
        );
        // Failed row keeps its local value and baseline.
        assert!(failed_row.todo.completed);
        assert!(!failed_row.original_completed);

        assert_dirty_invariant(&state);
    }

    #[test]
    fn test_successful_save_sets_new_baseline() {
        let mut state = loaded_state();
        state.toggle_completed(1);
        state.begin_save();
        state.apply_save_results(&[UpdateResult::ok(1, todo(1, true))]);

        // The saved value is now server truth; toggling again is a no-op
        // because completion is one-way.
        state.toggle_completed(1);
        assert_eq!(state.dirty_count(), 0);
        assert_dirty_invariant(&state);
    }

    #[test]
    fn test_rows_without_result_are_untouched() {
        let mut state = loaded_state();
        state.toggle_completed(1);
        state.toggle_completed(2);
        state.begin_save();

        state.apply_save_results(&[UpdateResult::ok(1, todo(1, true))]);

        // Row 2 got no result entry; its in-flight flag is still set.
        assert!(state.rows()[1].is_saving);
        assert!(state.rows()[1].is_dirty);
    }

    #[test]
    fn test_clear_changes_resets_every_row() {
        let mut state = loaded_state();
        state.toggle_completed(1);
        state.toggle_selection(2);
        state.toggle_selection(3);
        state.rows[1].save_error = Some("boom".to_string());

        state.clear_changes();

        for row in state.rows() {
            assert_eq!(row.todo.completed, row.original_completed);
            assert!(!row.is_selected);
            assert!(!row.is_dirty);
            assert!(row.save_error.is_none());
        }
        assert_eq!(state.dirty_count(), 0);
        assert_eq!(state.selected_count(), 0);
        assert_dirty_invariant(&state);
    }

    #[test]
    fn test_toggle_select_all_cycles() {
        let mut state = loaded_state();
        assert!(!state.is_all_selected());

        state.toggle_select_all();
        assert!(state.is_all_selected());
        assert_eq!(state.selected_count(), 3);
        assert!(!state.is_indeterminate());

        state.toggle_select_all();
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_partial_selection_is_indeterminate() {
        let mut state = loaded_state();
        state.toggle_selection(1);
        assert!(state.is_indeterminate());
        assert!(!state.is_all_selected());
        assert_eq!(state.selected_count(), 1);
    }

    #[test]
    fn test_is_all_selected_false_for_empty_set() {
        let state = TodosState::new();
        assert!(!state.is_all_selected());
        assert!(!state.is_indeterminate());
    }

    #[test]
    fn test_selection_does_not_affect_dirty_state() {
        let mut state = loaded_state();
        state.toggle_selection(1);
        state.toggle_select_all();
        assert_eq!(state.dirty_count(), 0);
        assert_dirty_invariant(&state);
    }
}
