//! Todo API Client Module
//!
//! Async client functions for the remote todo collection endpoint.

pub mod todos;

pub use todos::TodoApiClient;
