//! Todo API Client
//!
//! This module provides async functions for interacting with the remote todo
//! collection endpoint. The endpoint follows the JSONPlaceholder conventions:
//! `GET /todos` with `_page`/`_limit`/`_sort`/`_order` query parameters and
//! an `x-total-count` response header, and `PATCH /todos/{id}` for partial
//! updates.

use crate::egui_app::config::Config;
use crate::shared::error::TransportError;
use crate::shared::todo::{SortOrder, Todo, TodoUpdate, UpdateResult};
use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;

/// Response header carrying the collection's total record count
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Optional error body returned by the server on failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// Todo API client
pub struct TodoApiClient {
    config: Config,
    client: Client,
}

impl TodoApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch one page of todos.
    ///
    /// Returns the page's records together with the server-reported total
    /// count of the whole collection.
    pub async fn fetch_todos_paginated(
        &self,
        page: u32,
        limit: u32,
        sort_field: Option<&str>,
        sort_order: SortOrder,
    ) -> Result<(Vec<Todo>, u64), TransportError> {
        let url = self.config.api_url("/todos");

        let mut request = self
            .client
            .get(&url)
            .query(&[("_page", page.to_string()), ("_limit", limit.to_string())]);
        if let Some(field) = sort_field {
            request = request.query(&[("_sort", field), ("_order", sort_order.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::network(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let todos = response
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| TransportError::decode(format!("Failed to parse response: {}", e)))?;

        Ok((todos, total))
    }

    /// Update a single todo. Mutates exactly one remote record.
    pub async fn update_todo(&self, id: u64, payload: TodoUpdate) -> Result<Todo, TransportError> {
        let url = self.config.api_url(&format!("/todos/{}", id));

        let response = self
            .client
            .patch(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| TransportError::network(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        response
            .json::<Todo>()
            .await
            .map_err(|e| TransportError::decode(format!("Failed to parse response: {}", e)))
    }

    /// Update several todos concurrently.
    ///
    /// Issues one `update_todo` call per entry with no ordering dependency
    /// between them. Every entry yields exactly one result; a failed entry
    /// never cancels or blocks the rest.
    pub async fn batch_update_todos(&self, updates: Vec<(u64, TodoUpdate)>) -> Vec<UpdateResult> {
        let futures = updates.into_iter().map(|(id, payload)| async move {
            match self.update_todo(id, payload).await {
                Ok(todo) => UpdateResult::ok(id, todo),
                Err(e) => {
                    tracing::warn!("update for todo {} failed: {}", id, e);
                    UpdateResult::failed(id, e.to_string())
                }
            }
        });

        join_all(futures).await
    }

    /// Convert a non-success response into a `TransportError`, preferring the
    /// server's own message when the body carries one.
    async fn http_error(response: reqwest::Response) -> TransportError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let parsed = serde_json::from_str::<ErrorBody>(&body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected error")
                    .to_string()
            });
        let code = parsed.and_then(|b| b.code);

        TransportError::Http {
            status: status.as_u16(),
            message,
            code,
        }
    }
}
