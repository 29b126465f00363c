use log::{debug, info};
use crate::errors::WikiError;
use crate::services::EntryStore;
use crate::utils::titles_match;

/// Result of a title search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query names an entry, carrying the stored casing of its title
    Exact(String),
    /// Titles containing the query literally, never empty
    Matches(Vec<String>),
}

/// Service for searching entry titles
pub struct SearchService<'a> {
    store: &'a dyn EntryStore,
}

impl<'a> SearchService<'a> {
    /// Create a new search service
    pub fn new(store: &'a dyn EntryStore) -> Self {
        Self { store }
    }

    /// Search all stored titles for `query`
    pub fn search(&self, query: &str) -> Result<SearchOutcome, WikiError> {
        info!("Starting search for query: '{}'", query);
        let start_time = std::time::Instant::now();

        let entries = self.store.list_entries()?;
        let outcome = match_titles(&entries, query);

        info!(
            "Search for '{}' over {} titles finished in {}ms",
            query,
            entries.len(),
            start_time.elapsed().as_millis()
        );
        outcome
    }
}

/// Exact case-insensitive match first, then case-sensitive substring match
pub fn match_titles(entries: &[String], query: &str) -> Result<SearchOutcome, WikiError> {
    if let Some(title) = entries.iter().find(|title| titles_match(title, query)) {
        debug!("Query '{}' names entry '{}'", query, title);
        return Ok(SearchOutcome::Exact(title.clone()));
    }

    let matches: Vec<String> = entries
        .iter()
        .filter(|title| title.contains(query))
        .cloned()
        .collect();

    if matches.is_empty() {
        debug!("No titles contain '{}'", query);
        return Err(WikiError::NoMatch(query.to_string()));
    }

    debug!("Query '{}' is a substring of {} titles", query, matches.len());
    Ok(SearchOutcome::Matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryEntryStore;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_ignores_case_and_keeps_stored_title() {
        let entries = titles(&["CSS", "HTML"]);
        assert_eq!(match_titles(&entries, "html").unwrap(), SearchOutcome::Exact("HTML".into()));
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        let entries = titles(&["CSS", "HTML"]);
        assert_eq!(
            match_titles(&entries, "S").unwrap(),
            SearchOutcome::Matches(vec!["CSS".into()])
        );
        assert!(matches!(match_titles(&entries, "s"), Err(WikiError::NoMatch(_))));
    }

    #[test]
    fn no_match_reports_the_query() {
        let entries = titles(&["CSS", "HTML"]);
        match match_titles(&entries, "Z") {
            Err(WikiError::NoMatch(query)) => assert_eq!(query, "Z"),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }

    #[test]
    fn substring_returns_every_containing_title_in_order() {
        let entries = titles(&["Django", "Git", "GitHub", "Python"]);
        assert_eq!(
            match_titles(&entries, "Git").unwrap(),
            SearchOutcome::Exact("Git".into())
        );
        assert_eq!(
            match_titles(&entries, "it").unwrap(),
            SearchOutcome::Matches(titles(&["Git", "GitHub"]))
        );
    }

    #[test]
    fn empty_query_matches_everything() {
        let entries = titles(&["CSS", "HTML"]);
        assert_eq!(match_titles(&entries, "").unwrap(), SearchOutcome::Matches(entries.clone()));
        assert!(matches!(match_titles(&[], ""), Err(WikiError::NoMatch(_))));
    }

    #[test]
    fn service_reads_titles_from_store() {
        let store = MemoryEntryStore::with_entries([("CSS", "a"), ("HTML", "b")]);
        let service = SearchService::new(&store);
        assert_eq!(service.search("css").unwrap(), SearchOutcome::Exact("CSS".into()));
    }
}
