use std::sync::Arc;

use crate::forms::{EntryForm, FormErrors};
use crate::services::EntryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    pub fn new(store: impl EntryStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }
}

/// Template rendering context
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub title: String,
    pub content: String,
    pub sidebar: String,
}

/// Everything the template component knows how to draw
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// All titles in the store
    Index { entries: Vec<String> },
    /// A single entry, `html` already rendered from markup
    Entry { title: String, html: String },
    NewForm { form: EntryForm, errors: FormErrors },
    /// `title` is the entry the form was opened for, used as the form action
    EditForm { title: String, form: EntryForm, errors: FormErrors },
    SearchResults { query: String, matches: Vec<String> },
    Error { message: String },
}

impl Page {
    /// Text used in the document `<title>`
    pub fn title(&self) -> String {
        match self {
            Page::Index { .. } => "Encyclopedia".to_string(),
            Page::Entry { title, .. } => title.clone(),
            Page::NewForm { .. } => "Create New Page".to_string(),
            Page::EditForm { title, .. } => format!("Edit {}", title),
            Page::SearchResults { query, .. } => format!("Search: {}", query),
            Page::Error { .. } => "Error".to_string(),
        }
    }
}
