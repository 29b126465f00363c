//! Create/edit form input and its validation.
//!
//! Handlers deserialize the urlencoded body into [`EntryForm`] and call
//! [`EntryForm::validate`]. A failed validation carries the per-field
//! messages the form page shows next to the inputs.

use serde::Deserialize;
use crate::utils::{fits_file_name, is_storable_title, MAX_FILE_NAME_BYTES, ENTRY_FILE_SUFFIX};

/// Longest accepted title, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Raw form submission, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Form field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All validation failures of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    /// Messages attached to `field`, in the order they were found
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub title: String,
    pub content: String,
}

impl EntryForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }

    /// Check both fields, returning the cleaned payload or every field error
    pub fn validate(&self) -> Result<ValidEntry, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self.title.trim();

        if title.is_empty() {
            errors.push(Field::Title, "This field is required.");
        } else if title.chars().count() > MAX_TITLE_CHARS {
            errors.push(
                Field::Title,
                format!("Ensure this value has at most {} characters.", MAX_TITLE_CHARS),
            );
        } else if !fits_file_name(title) {
            errors.push(
                Field::Title,
                format!(
                    "Title is too long to store: at most {} bytes of UTF-8 are allowed.",
                    MAX_FILE_NAME_BYTES - ENTRY_FILE_SUFFIX.len()
                ),
            );
        } else if !is_storable_title(title) {
            errors.push(Field::Title, "Title may not contain slashes or be \".\" or \"..\".");
        }

        let content = self.content.trim();
        if content.is_empty() {
            errors.push(Field::Content, "This field is required.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidEntry {
            title: title.to_string(),
            content: content.replace("\r\n", "\n"),
        })
    }
}
