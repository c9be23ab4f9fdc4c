//! egui Native Desktop App Module
//!
//! This module provides the native desktop todo manager built with
//! egui/eframe, talking to a JSONPlaceholder-style REST API.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Main application entry point (binary)
//! ├── config.rs   - Configuration management (API base URL)
//! ├── api/        - Async todo API client (list, update, batch update)
//! ├── state/      - Row reconciliation, pagination, UI<->async bridge
//! └── views/      - Table, action bar, and pagination rendering
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod api;
pub mod config;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use api::TodoApiClient;
pub use config::Config;
pub use state::AppState;
