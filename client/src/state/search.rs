//! Search page state.
//!
//! A blank query never reaches the provider; the page shows featured
//! placeholder suggestions instead.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use eexplo_content::SearchResults;

use crate::net::api::ApiError;

/// Trim and collapse inner whitespace. `None` for a blank query.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Normalized query that produced `results`.
    pub query: Option<String>,
    pub loading: bool,
    pub results: SearchResults,
    pub failed: bool,
}

impl SearchState {
    /// Start a search for `raw`. Returns the query to send, if any.
    pub fn begin(&mut self, raw: &str) -> Option<String> {
        self.query = normalize_query(raw);
        self.results = SearchResults::default();
        self.failed = false;
        self.loading = self.query.is_some();
        self.query.clone()
    }

    /// Apply a provider response, ignoring responses for a stale query.
    pub fn resolve(&mut self, query: &str, result: Result<SearchResults, ApiError>) {
        if self.query.as_deref() != Some(query) {
            return;
        }
        match result {
            Ok(results) => self.results = results,
            Err(_) => self.failed = true,
        }
        self.loading = false;
    }

    /// True once a non-blank query has finished with no matches.
    #[must_use]
    pub fn no_matches(&self) -> bool {
        self.query.is_some() && !self.loading && self.results.is_empty()
    }
}
