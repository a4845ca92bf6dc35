//! DDG-Search: a web search tool backed by the DuckDuckGo HTML endpoint
//!
//! This crate implements the `search_duckduckgo` tool: it fetches the HTML
//! results page for a query, scans it for result markers, and degrades to
//! deterministic fallback results whenever acquisition fails.

pub mod config;
pub mod search;
pub mod tool;

use thiserror::Error;

/// Main error type for DDG-Search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Validation(String),
}

/// Transport-level failures raised by the fetcher
///
/// These never reach a tool caller directly: the pipeline absorbs them and
/// answers with fallback results instead.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid header in config: {0}")]
    InvalidHeader(String),
}

/// Result type alias for DDG-Search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;

// Re-export commonly used types
pub use config::Config;
pub use search::{SearchRequest, SearchResult, Searcher};
pub use tool::{SearchTool, ToolResult};
