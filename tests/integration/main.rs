//! Integration tests for the search pipeline and the tool surface
//!
//! These tests use wiremock to stand in for the search endpoint and drive the
//! full fetch → extract → fallback cycle end-to-end.

mod tool_tests;

use ddg_search::config::Config;
use ddg_search::Searcher;
use wiremock::MockServer;

/// Results page with three well-formed hits
pub const RESULTS_PAGE: &str = include_str!("../fixtures/results.html");

/// Page the endpoint serves when it decides the client is a bot
pub const CHALLENGE_PAGE: &str =
    "<html><body><form id=\"challenge-form\">Please complete the challenge</form></body></html>";

/// Creates a test configuration pointed at the mock server
pub fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.search.endpoint = format!("{}/html/", server.uri());
    config.search.retry_backoff_ms = 10; // Very short for testing
    config.search.timeout_secs = 5;
    config
}

pub fn create_test_searcher(server: &MockServer) -> Searcher {
    Searcher::new(&create_test_config(server)).expect("Failed to build searcher")
}
