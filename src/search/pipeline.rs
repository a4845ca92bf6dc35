//! Search pipeline - fetch, extract, and fall back
//!
//! The `Searcher` owns the pooled HTTP client. Create one at startup and share
//! it (it is cheap to clone); the pool is released when the last clone drops.

use crate::config::{Config, SearchSettings};
use crate::search::{extract, fallback, fetch, fetch_with_cancel, SearchRequest, SearchResult};
use crate::{NetworkError, Result};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

/// Characters of an unparseable body included in debug logs
const BODY_PREVIEW_CHARS: usize = 500;

/// Main search pipeline
#[derive(Debug, Clone)]
pub struct Searcher {
    client: Client,
    settings: SearchSettings,
}

impl Searcher {
    /// Creates a searcher and its connection pool
    ///
    /// # Returns
    ///
    /// * `Ok(Searcher)` - Ready to serve searches
    /// * `Err(SearchError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self> {
        let client = crate::search::build_http_client(config)?;
        Ok(Self::with_client(client, config.search.clone()))
    }

    /// Creates a searcher around an existing client
    pub fn with_client(client: Client, settings: SearchSettings) -> Self {
        Self { client, settings }
    }

    /// Runs a search, always producing an answer
    ///
    /// Network failures and empty extractions both degrade to
    /// [`fallback`] results.
    pub async fn search(&self, request: &SearchRequest) -> Vec<SearchResult> {
        let outcome = fetch(&self.client, &self.settings, request.query())
            .await
            .map(|page| extract_logged(&page.body, request.max_results()));
        recover_with_fallback(request, outcome)
    }

    /// Runs a search that the caller can abort
    ///
    /// Same policy as [`Searcher::search`], except that cancellation is
    /// reported as `NetworkError::Cancelled` instead of being answered with
    /// fallback results.
    pub async fn search_with_cancel(
        &self,
        request: &SearchRequest,
        token: &CancellationToken,
    ) -> std::result::Result<Vec<SearchResult>, NetworkError> {
        let outcome = fetch_with_cancel(&self.client, &self.settings, request.query(), token)
            .await
            .map(|page| extract_logged(&page.body, request.max_results()));

        match outcome {
            Err(NetworkError::Cancelled) => Err(NetworkError::Cancelled),
            other => Ok(recover_with_fallback(request, other)),
        }
    }
}

/// Turns a fetch-and-extract outcome into the final answer
///
/// | Outcome | Answer |
/// |---------|--------|
/// | `Ok(results)`, non-empty | `results` |
/// | `Ok(results)`, empty | fallback |
/// | `Err(NetworkError)` | fallback |
pub fn recover_with_fallback(
    request: &SearchRequest,
    outcome: std::result::Result<Vec<SearchResult>, NetworkError>,
) -> Vec<SearchResult> {
    match outcome {
        Ok(results) if !results.is_empty() => results,
        Ok(_) => fallback(request.query(), request.max_results()),
        Err(e) => {
            tracing::error!(error = %e, "Search failed, answering with fallback results");
            fallback(request.query(), request.max_results())
        }
    }
}

/// Extracts results and reports pages that yielded none
fn extract_logged(body: &str, max_results: usize) -> Vec<SearchResult> {
    let results = extract(body, max_results);

    if results.is_empty() {
        tracing::warn!(
            body_len = body.chars().count(),
            "No search results found in HTML response"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
            let ellipsis = if body.chars().count() > BODY_PREVIEW_CHARS { "..." } else { "" };
            tracing::debug!("HTML preview: {}{}", preview, ellipsis);
        }
    }

    results
}
