//! Todo Data Structures
//!
//! Defines the todo record as served by the remote collection endpoint,
//! the partial-update payload, and the per-item result of a batch save.

use serde::{Deserialize, Serialize};

/// A todo record as stored on the server.
///
/// The `id` is server-assigned and stable; records are fetched and updated
/// but never created or deleted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Sort direction for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire representation used in the `_order` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Payload for a partial todo update. Only the completion flag is mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub completed: bool,
}

/// Result of one update inside a batch save.
///
/// Every entry submitted to a batch produces exactly one result; a failure
/// for one id never cancels the others. Results are correlated by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub id: u64,
    pub success: bool,
    /// The updated record as returned by the server, on success.
    pub todo: Option<Todo>,
    /// Human-readable failure message, on failure.
    pub error: Option<String>,
}

impl UpdateResult {
    /// Build a success result carrying the server's updated record
    pub fn ok(id: u64, todo: Todo) -> Self {
        Self {
            id,
            success: true,
            todo: Some(todo),
            error: None,
        }
    }

    /// Build a failure result carrying an error message
    pub fn failed(id: u64, error: impl Into<String>) -> Self {
        Self {
            id,
            success: false,
            todo: None,
            error: Some(error.into()),
        }
    }
}
