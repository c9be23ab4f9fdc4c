//! Shared Module
//!
//! This module contains platform-agnostic types used across the application:
//! todo records as exchanged with the remote API, transport error types, and
//! application configuration. All types here are designed for serialization
//! and transmission over HTTP.

/// Todo data structures
pub mod todo;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{SortOrder, Todo, TodoUpdate, UpdateResult};
pub use error::TransportError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
