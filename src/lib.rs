//! TodoDesk - Main Library
//!
//! TodoDesk is a native desktop todo manager built with Rust. It fetches
//! paginated todos from a JSONPlaceholder-style REST API, lets the user
//! toggle completion across the visible page, tracks unsaved edits per row,
//! and batch-saves them back with per-row failure reporting.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Platform-agnostic types
//!   - Todo records and update payloads
//!   - Transport error types
//!   - Application configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Todo API client (list + partial update + batch update)
//!   - Row state reconciliation and pagination control
//!   - Table, action bar, and pagination views
//!
//! # Usage
//!
//! ```rust,no_run
//! // Run the native desktop app:
//! // cargo run --bin egui_app
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, E>` with the transport error type
//! defined in `shared::error`. Per-row save failures never abort a batch;
//! they are collected into per-item results instead.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
