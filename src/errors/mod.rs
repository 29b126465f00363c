use std::io;
use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use thiserror::Error;

use crate::components::TemplateComponent;
use crate::types::Page;

/// Custom error types for the encyclopedia
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("entry not found: {0}")]
    NotFound(String),
    #[error("entry already exists: {0}")]
    AlreadyExists(String),
    #[error("no entry matches: {0}")]
    NoMatch(String),
    #[error("the encyclopedia has no entries")]
    EmptyStore,
    #[error("invalid entry title: {0:?}")]
    InvalidTitle(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl WikiError {
    /// Status code sent with the error page
    pub fn status(&self) -> StatusCode {
        match self {
            WikiError::NotFound(_) | WikiError::NoMatch(_) | WikiError::EmptyStore => {
                StatusCode::NOT_FOUND
            }
            WikiError::AlreadyExists(_) => StatusCode::CONFLICT,
            WikiError::InvalidTitle(_) => StatusCode::BAD_REQUEST,
            WikiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the reader on the error page
    pub fn page_message(&self) -> String {
        match self {
            WikiError::NotFound(_) => "404 Page not found.".to_string(),
            WikiError::AlreadyExists(_) => {
                "Error: This encyclopedia entry already exists".to_string()
            }
            WikiError::NoMatch(_) => "No entry found.".to_string(),
            WikiError::EmptyStore => {
                "No entries yet. Create the first one to get started.".to_string()
            }
            WikiError::InvalidTitle(title) => format!("\"{}\" is not a valid entry title.", title),
            WikiError::Io(e) => format!("I/O error: {}", e),
        }
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match &self {
            WikiError::Io(e) => log::error!("Request failed: {}", e),
            other => log::info!("Responding with error page: {}", other),
        }
        let page = Page::Error {
            message: self.page_message(),
        };
        let html = TemplateComponent::new().render_page(&page);
        (self.status(), Html(html)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_condition_has_its_own_message() {
        let messages = [
            WikiError::NotFound("X".into()).page_message(),
            WikiError::AlreadyExists("X".into()).page_message(),
            WikiError::NoMatch("X".into()).page_message(),
            WikiError::EmptyStore.page_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn duplicate_maps_to_conflict() {
        assert_eq!(WikiError::AlreadyExists("CSS".into()).status(), StatusCode::CONFLICT);
        assert_eq!(WikiError::NotFound("CSS".into()).status(), StatusCode::NOT_FOUND);
    }
}
