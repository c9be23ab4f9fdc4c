//! Application State
//!
//! Central state shared across egui views, plus the bridge between the
//! immediate-mode UI and async API calls: work runs on a background thread
//! with its own tokio runtime, results come back over std mpsc channels and
//! are drained with `try_recv` once per frame.

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::api::TodoApiClient;
use crate::egui_app::config::Config;
use crate::shared::error::TransportError;
use crate::shared::todo::{Todo, UpdateResult};

pub mod pagination;
pub mod todos;

pub use pagination::{PageItem, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use todos::{TodoRow, TodosState};

type LoadResult = Result<(Vec<Todo>, u64), TransportError>;

/// Outcome counts of the most recent save batch, for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub todos: TodosState,
    pub pagination: Pagination,
    load_result: Option<Receiver<LoadResult>>,
    save_result: Option<Receiver<Vec<UpdateResult>>>,
    pub last_save_summary: Option<SaveSummary>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            todos: TodosState::new(),
            pagination: Pagination::new(),
            load_result: None,
            save_result: None,
            last_save_summary: None,
        }
    }

    /// Fetch the current page from the API on a background thread.
    ///
    /// Rejected while a save batch is outstanding; a reload would replace
    /// the very rows the batch is about to reconcile. Issuing a new load
    /// while an older one is still in flight drops the older receiver, so
    /// only the newest request's result is ever applied.
    pub fn reload(&mut self) {
        if self.todos.is_saving() {
            tracing::warn!("reload rejected: save batch in flight");
            return;
        }

        self.todos.is_loading = true;
        self.todos.load_error = None;

        let config = self.config.clone();
        let page = self.pagination.page();
        let page_size = self.pagination.page_size();
        let sort_field = self.pagination.sort_field().map(|s| s.to_string());
        let sort_order = self.pagination.sort_order();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(async {
                    let client = TodoApiClient::new(config);
                    client
                        .fetch_todos_paginated(page, page_size, sort_field.as_deref(), sort_order)
                        .await
                }),
                Err(e) => Err(TransportError::network(format!(
                    "Failed to create runtime: {}",
                    e
                ))),
            };
            let _ = tx.send(result);
        });

        self.load_result = Some(rx);
    }

    /// Drain a finished load, if any. Called once per frame.
    ///
    /// On failure the previous row set is left intact; only the page-level
    /// error changes, and the user can retry.
    pub fn check_load_result(&mut self) {
        let Some(rx) = &self.load_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        self.load_result = None;

        match result {
            Ok((todos, total)) => {
                tracing::info!("loaded {} todos (total {})", todos.len(), total);
                self.pagination.set_total_count(total);
                self.todos.set_rows(todos);
            }
            Err(e) => {
                tracing::error!("failed to load todos: {}", e);
                self.todos.is_loading = false;
                self.todos.load_error = Some(e.to_string());
            }
        }
    }

    /// Move to a page and refetch. No-op while saving or when already there.
    pub fn set_page(&mut self, page: u32) {
        if self.todos.is_saving() {
            tracing::warn!("page change rejected: save batch in flight");
            return;
        }
        let previous = self.pagination.page();
        self.pagination.set_page(page);
        if self.pagination.page() != previous {
            self.reload();
        }
    }

    /// Change the page size and refetch from page 1. No-op while saving.
    pub fn set_page_size(&mut self, page_size: u32) {
        if self.todos.is_saving() {
            tracing::warn!("page size change rejected: save batch in flight");
            return;
        }
        let previous = self.pagination.page_size();
        self.pagination.set_page_size(page_size);
        if self.pagination.page_size() != previous {
            self.reload();
        }
    }

    /// Toggle sorting on a field and refetch. No-op while saving.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.todos.is_saving() {
            tracing::warn!("sort change rejected: save batch in flight");
            return;
        }
        self.pagination.toggle_sort(field);
        self.reload();
    }

    pub fn toggle_completed(&mut self, id: u64) {
        self.todos.toggle_completed(id);
    }

    pub fn toggle_selection(&mut self, id: u64) {
        self.todos.toggle_selection(id);
    }

    pub fn toggle_select_all(&mut self) {
        self.todos.toggle_select_all();
    }

    /// Batch-save every dirty row on a background thread.
    ///
    /// With nothing dirty this is a complete no-op: no thread, no network
    /// calls. Rows are marked in-flight before the thread spawns, and any
    /// pending load result is dropped so the row set cannot be replaced out
    /// from under the outstanding batch.
    pub fn save_changes(&mut self) {
        if self.save_result.is_some() || self.todos.is_saving() {
            return;
        }

        let updates = self.todos.begin_save();
        if updates.is_empty() {
            return;
        }

        // A load still in flight would replace the very rows this batch is
        // about to reconcile; abandon it. New reloads stay rejected until
        // the batch lands.
        if self.load_result.take().is_some() {
            tracing::warn!("save issued: abandoning in-flight load");
            self.todos.is_loading = false;
        }
        self.last_save_summary = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let ids: Vec<u64> = updates.iter().map(|(id, _)| *id).collect();
            let results = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(async {
                    let client = TodoApiClient::new(config);
                    client.batch_update_todos(updates).await
                }),
                Err(e) => ids
                    .iter()
                    .map(|id| {
                        UpdateResult::failed(*id, format!("Failed to create runtime: {}", e))
                    })
                    .collect(),
            };
            let _ = tx.send(results);
        });

        self.save_result = Some(rx);
    }

    /// Drain a finished save batch, if any. Called once per frame.
    pub fn check_save_result(&mut self) {
        let Some(rx) = &self.save_result else {
            return;
        };
        let Ok(results) = rx.try_recv() else {
            return;
        };
        self.save_result = None;

        let succeeded = results.iter().filter(|r| r.success).count();
        let failed = results.len() - succeeded;
        tracing::info!("save batch done: {} succeeded, {} failed", succeeded, failed);

        self.todos.apply_save_results(&results);
        self.last_save_summary = Some(SaveSummary { succeeded, failed });
    }

    /// Discard all local edits. No-op while a save batch is outstanding.
    pub fn clear_changes(&mut self) {
        if self.todos.is_saving() {
            return;
        }
        self.todos.clear_changes();
        self.last_save_summary = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
