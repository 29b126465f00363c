use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::components::TemplateComponent;
use crate::errors::WikiError;
use crate::forms::{EntryForm, FormErrors};
use crate::services::{EntryStore, MarkdownService, SearchOutcome, SearchService};
use crate::types::{AppState, Page};
use crate::utils::titles_match;

/// Query string of `/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Handle root path requests: list every entry
pub async fn handle_index(State(state): State<AppState>) -> Result<impl IntoResponse, WikiError> {
    let entries = state.store.list_entries()?;
    log::info!("Serving index with {} entries", entries.len());
    Ok(render(&Page::Index { entries }))
}

/// Handle `/wiki/<title>/`
pub async fn handle_entry(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, WikiError> {
    log::info!("Entry request received: '{}'", title);
    entry_page(state.store.as_ref(), &title)
}

/// Show a blank creation form
pub async fn handle_new_form() -> impl IntoResponse {
    render(&Page::NewForm {
        form: EntryForm::default(),
        errors: FormErrors::default(),
    })
}

/// Create an entry unless a title differing only in case already exists
pub async fn handle_new_submit(
    State(state): State<AppState>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Result<Response, WikiError> {
    let form = submitted_form(form);
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(errors) => {
            log::debug!("Rejected new entry submission: {:?}", errors);
            return Ok(invalid(Page::NewForm { form, errors }));
        }
    };

    let entries = state.store.list_entries()?;
    if let Some(existing) = entries.iter().find(|t| titles_match(t, &entry.title)) {
        log::warn!("Entry '{}' already exists as '{}'", entry.title, existing);
        return Err(WikiError::AlreadyExists(entry.title));
    }

    state.store.save_entry(&entry.title, &entry.content)?;
    log::info!("Created entry '{}'", entry.title);
    entry_page(state.store.as_ref(), &entry.title)
}

/// Show the edit form pre-filled with the current content
pub async fn handle_edit_form(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, WikiError> {
    let content = state.store.get_entry(&title)?.unwrap_or_default();
    log::debug!("Editing '{}', {} bytes of current content", title, content.len());
    let form = EntryForm::new(title.clone(), content);
    Ok(render(&Page::EditForm {
        title,
        form,
        errors: FormErrors::default(),
    }))
}

/// Save an edit. Overwrites whatever is stored under the submitted title.
pub async fn handle_edit_submit(
    State(state): State<AppState>,
    Path(title): Path<String>,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Result<Response, WikiError> {
    let form = submitted_form(form);
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(errors) => {
            log::debug!("Rejected edit of '{}': {:?}", title, errors);
            return Ok(invalid(Page::EditForm { title, form, errors }));
        }
    };

    if entry.title != title {
        log::info!("Edit of '{}' saved under title '{}'", title, entry.title);
    }
    state.store.save_entry(&entry.title, &entry.content)?;
    log::info!("Updated entry '{}'", entry.title);
    entry_page(state.store.as_ref(), &entry.title)
}

/// Handle search requests
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, WikiError> {
    let query = params.q;
    log::info!("Search request received for query: '{}'", query);

    let search_service = SearchService::new(state.store.as_ref());
    match search_service.search(&query)? {
        SearchOutcome::Exact(title) => entry_page(state.store.as_ref(), &title),
        SearchOutcome::Matches(matches) => Ok(render(&Page::SearchResults { query, matches }).into_response()),
    }
}

/// Show a uniformly chosen entry
pub async fn handle_shuffle(State(state): State<AppState>) -> Result<Response, WikiError> {
    let entries = state.store.list_entries()?;
    let title = entries.choose(&mut rand::rng()).ok_or(WikiError::EmptyStore)?;
    log::info!("Shuffle picked '{}' out of {} entries", title, entries.len());
    entry_page(state.store.as_ref(), title)
}

/// Render the stored entry or fail with `NotFound`
fn entry_page(store: &dyn EntryStore, title: &str) -> Result<Response, WikiError> {
    let Some(content) = store.get_entry(title)? else {
        log::warn!("Entry not found: '{}'", title);
        return Err(WikiError::NotFound(title.to_string()));
    };

    let html = MarkdownService::new().render(&content);
    let page = Page::Entry {
        title: title.to_string(),
        html,
    };
    Ok(render(&page).into_response())
}

/// An unreadable body validates like an empty form
fn submitted_form(form: Result<Form<EntryForm>, FormRejection>) -> EntryForm {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            log::warn!("Unreadable form submission: {}", rejection);
            EntryForm::default()
        }
    }
}

fn render(page: &Page) -> Html<String> {
    Html(TemplateComponent::new().render_page(page))
}

fn invalid(page: Page) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, render(&page)).into_response()
}
