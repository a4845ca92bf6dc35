use crate::config::types::{Config, SearchSettings};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;
use url::Url;

/// Upper bound for `timeout-secs`
const MAX_TIMEOUT_SECS: u64 = 300;

/// Upper bound for `retry-backoff-ms`
const MAX_RETRY_BACKOFF_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_settings(&config.search)?;
    validate_headers(&config.headers)?;
    Ok(())
}

/// Validates endpoint and timing settings
fn validate_search_settings(settings: &SearchSettings) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&settings.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid endpoint: {}", e)))?;

    if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "Endpoint '{}' must use http or https",
            settings.endpoint
        )));
    }

    if settings.timeout_secs < 1 || settings.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, settings.timeout_secs
        )));
    }

    if settings.retry_backoff_ms > MAX_RETRY_BACKOFF_MS {
        return Err(ConfigError::Validation(format!(
            "retry-backoff-ms must be <= {}, got {}",
            MAX_RETRY_BACKOFF_MS, settings.retry_backoff_ms
        )));
    }

    Ok(())
}

/// Validates that every configured header is sendable
fn validate_headers(headers: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("Invalid header name '{}'", name)))?;

        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::InvalidHeader(format!("Invalid value for header '{}'", name))
        })?;
    }
    Ok(())
}
