//! HTTP fetcher for the search endpoint
//!
//! This module handles all outbound requests, including:
//! - Building the pooled HTTP client with the browser-like header set
//! - The initial results-page request
//! - The single retry issued when the endpoint answers 202 Accepted
//! - Error classification into `NetworkError`

use crate::config::{Config, SearchSettings};
use crate::{ConfigError, NetworkError, NetworkResult, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Raw results page returned by a successful fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Status of the response the body came from (200 or 202)
    pub status: u16,

    /// Response body as text
    pub body: String,
}

/// Builds the HTTP client shared by every search
///
/// The configured headers become default headers. The endpoint redirects on
/// occasion, so up to 10 hops are followed.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(SearchError)` - A header could not be encoded or the client failed to build
pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("Invalid header name '{}'", name)))?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            ConfigError::InvalidHeader(format!("Invalid value for header '{}'", name))
        })?;
        headers.insert(header_name, header_value);
    }

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.search.timeout())
        .connect_timeout(Duration::from_secs(10).min(config.search.timeout()))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(NetworkError::ClientBuild)?;

    Ok(client)
}

/// Fetches the results page for `query`
///
/// # Request Flow
///
/// | Attempt | Parameters | Outcome |
/// |---------|------------|---------|
/// | 1 | `q`, `ia=web` | 200 → body; 202 → retry; other → `NetworkError::Status` |
/// | 2 (after backoff) | `q` | 200 or 202 → body; other → `NetworkError::Status` |
///
/// A second 202 is accepted as-is: such bodies often still contain results.
pub async fn fetch(
    client: &Client,
    settings: &SearchSettings,
    query: &str,
) -> NetworkResult<FetchedPage> {
    let endpoint = settings.endpoint.as_str();

    let mut response = send(client, endpoint, &[("q", query), ("ia", "web")], 1).await?;

    if response.status() == StatusCode::ACCEPTED {
        tracing::warn!(
            backoff_ms = settings.retry_backoff_ms,
            "Received 202 Accepted, retrying without the ia parameter"
        );
        tokio::time::sleep(settings.retry_backoff()).await;

        response = send(client, endpoint, &[("q", query)], 2).await?;

        if response.status() == StatusCode::ACCEPTED {
            tracing::info!("Retry still returned 202, attempting to parse the body anyway");
        }
    }

    let status = response.status();
    if status != StatusCode::OK && status != StatusCode::ACCEPTED {
        return Err(NetworkError::Status {
            url: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_error(endpoint, e))?;

    Ok(FetchedPage {
        status: status.as_u16(),
        body,
    })
}

/// Fetches like [`fetch`], aborting the in-flight request when `token` fires
pub async fn fetch_with_cancel(
    client: &Client,
    settings: &SearchSettings,
    query: &str,
    token: &CancellationToken,
) -> NetworkResult<FetchedPage> {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("Search request cancelled by caller");
            Err(NetworkError::Cancelled)
        }
        result = fetch(client, settings, query) => result,
    }
}

/// Sends one GET and logs the status it came back with
async fn send(
    client: &Client,
    endpoint: &str,
    params: &[(&str, &str)],
    attempt: u8,
) -> NetworkResult<Response> {
    let response = client
        .get(endpoint)
        .query(params)
        .send()
        .await
        .map_err(|e| classify_error(endpoint, e))?;

    tracing::info!(status = response.status().as_u16(), attempt, "HTTP status received");
    Ok(response)
}

/// Maps a reqwest failure onto the network error taxonomy
fn classify_error(endpoint: &str, error: reqwest::Error) -> NetworkError {
    let url = endpoint.to_string();
    if error.is_timeout() {
        NetworkError::Timeout { url }
    } else if error.is_connect() {
        NetworkError::Connect { url, source: error }
    } else {
        NetworkError::Http { url, source: error }
    }
}
