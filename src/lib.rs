//! Encyclopedia - a small wiki that keeps Markdown entries on disk
//!
//! Entries live in a flat directory as `<title>.md`. The web interface lists,
//! views, creates, edits and searches them, and can pick one at random.

pub mod components;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

use axum::{routing::get, Router};

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use forms::{EntryForm, FormErrors, ValidEntry};
pub use types::{AppState, Page};
pub use services::{EntryStore, FileEntryStore, MemoryEntryStore, MarkdownService, SearchService, SearchOutcome};
pub use components::{NavigationComponent, TemplateComponent};

/// Build the router serving every page of the encyclopedia
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/wiki/:title", get(handlers::handle_entry))
        .route("/wiki/:title/", get(handlers::handle_entry))
        .route("/new", get(handlers::handle_new_form).post(handlers::handle_new_submit))
        .route("/search", get(handlers::handle_search))
        .route("/edit/:title", get(handlers::handle_edit_form).post(handlers::handle_edit_submit))
        .route("/shuffle", get(handlers::handle_shuffle))
        .with_state(state)
}
