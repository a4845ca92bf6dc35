use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// The DuckDuckGo HTML results page
pub const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Main configuration structure for DDG-Search
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchSettings,

    /// Headers attached to every outbound request
    ///
    /// The endpoint tends to reject or throttle clients that do not look like
    /// a desktop browser, so the defaults mimic one. Entries given in a config
    /// file replace the whole default set.
    pub headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchSettings::default(),
            headers: default_headers(),
        }
    }
}

/// Search endpoint and request timing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search results page to query
    pub endpoint: String,

    /// Wall-clock budget for connect + read of a single request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Pause before the retry issued after a 202 response (milliseconds)
    #[serde(rename = "retry-backoff-ms")]
    pub retry_backoff_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            retry_backoff_ms: 1000,
        }
    }
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

fn default_headers() -> BTreeMap<String, String> {
    [
        (
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        ),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
        ("Accept-Language", "ja,en-US;q=0.9,en;q=0.8"),
        ("Upgrade-Insecure-Requests", "1"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}
