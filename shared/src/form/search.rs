//! Phone number search view state

use crate::models::Reservation;

/// Hint shown in the empty search box
pub const SEARCH_PLACEHOLDER: &str = "Enter a customer's phone number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    QueryChanged(String),
    ResultsLoaded(Vec<Reservation>),
    SearchFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    results: Vec<Reservation>,
    empty_search: bool,
    no_results: bool,
    error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            empty_search: true,
            no_results: false,
            error: None,
        }
    }
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Reservation] {
        &self.results
    }

    /// Nothing searched yet; show the prompt instead of results
    pub fn is_empty_search(&self) -> bool {
        self.empty_search
    }

    /// A search ran and matched nothing
    pub fn is_no_results(&self) -> bool {
        self.no_results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the current query should be sent to the API
    pub fn should_fetch(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn reduce(mut self, action: SearchAction) -> Self {
        match action {
            // A lone space is swallowed so the box never starts with one
            SearchAction::QueryChanged(value) if value == " " => {}
            SearchAction::QueryChanged(value) => {
                self.empty_search = value.is_empty();
                self.query = value;
                self.error = None;
                self.no_results = false;
                if self.empty_search {
                    self.results.clear();
                }
            }
            SearchAction::ResultsLoaded(results) => {
                self.no_results = results.is_empty() && !self.empty_search;
                self.results = results;
                self.error = None;
            }
            SearchAction::SearchFailed(message) => {
                self.error = Some(message);
                self.no_results = false;
            }
        }
        self
    }
}
