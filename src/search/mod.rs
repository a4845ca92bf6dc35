//! Search acquisition pipeline
//!
//! This module contains the whole path from a query to a list of results:
//! - HTTP fetching with the 202 retry policy
//! - Line-oriented extraction of result markers from the HTML page
//! - Deterministic fallback results when acquisition yields nothing
//! - The `Searcher` that composes the three and owns the connection pool

mod extractor;
mod fallback;
mod fetcher;
mod pipeline;

pub use extractor::{
    clean_html, extract, NO_SNIPPET_PLACEHOLDER, SNIPPET_MARKER, SNIPPET_WINDOW, TITLE_MARKER,
};
pub use fallback::fallback;
pub use fetcher::{build_http_client, fetch, fetch_with_cancel, FetchedPage};
pub use pipeline::{recover_with_fallback, Searcher};

use crate::{Result, SearchError};
use serde::Serialize;

/// Number of results returned when the caller does not ask for a count
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Largest result count a caller may request
pub const MAX_RESULTS_LIMIT: usize = 20;

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// A validated search query
///
/// Construction guarantees a non-blank query and a result bound within
/// `1..=MAX_RESULTS_LIMIT`, so the pipeline never has to re-check either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    max_results: usize,
}

impl SearchRequest {
    /// Creates a request, rejecting empty queries and out-of-range bounds
    pub fn new(query: impl Into<String>, max_results: usize) -> Result<Self> {
        let query = query.into();

        if query.is_empty() {
            return Err(SearchError::Validation("検索クエリが必要です".to_string()));
        }

        if !(1..=MAX_RESULTS_LIMIT).contains(&max_results) {
            return Err(max_results_out_of_range(max_results));
        }

        Ok(Self { query, max_results })
    }

    /// Creates a request with the default result bound
    pub fn with_default_limit(query: impl Into<String>) -> Result<Self> {
        Self::new(query, DEFAULT_MAX_RESULTS)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

pub(crate) fn max_results_out_of_range(value: impl std::fmt::Display) -> SearchError {
    SearchError::Validation(format!(
        "max_results は 1 から {} の範囲で指定してください（指定値: {}）",
        MAX_RESULTS_LIMIT, value
    ))
}
