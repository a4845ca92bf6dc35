use crate::{create_test_searcher, RESULTS_PAGE};
use ddg_search::tool::{descriptor, TOOL_NAME};
use ddg_search::SearchTool;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_tool_call_formats_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .mount(&mock_server)
        .await;

    let tool = SearchTool::new(create_test_searcher(&mock_server));
    let result = tool
        .call(TOOL_NAME, &json!({"query": "rust async", "max_results": 2}))
        .await;

    assert!(!result.is_error);
    assert_eq!(
        result.text(),
        "「rust async」の検索結果（2件）:\n\n\
         1. **Asynchronous Programming in Rust**\n   \
         URL: https://rust-lang.github.io/async-book/\n   \
         要約: Getting Started. Welcome to Asynchronous Programming in Rust!\n\
         \n\
         2. **Tutorial | Tokio - An asynchronous Rust runtime**\n   \
         URL: https://tokio.rs/tokio/tutorial\n   \
         要約: Tokio is an asynchronous runtime for the Rust programming language & more.\n"
    );
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .expect(0)
        .mount(&mock_server)
        .await;

    let tool = SearchTool::new(create_test_searcher(&mock_server));

    let result = tool.call(TOOL_NAME, &json!({"query": ""})).await;
    assert!(result.is_error);
    assert_eq!(result.text(), "検索エラー: 検索クエリが必要です");

    let result = tool.call(TOOL_NAME, &json!({"max_results": 5})).await;
    assert!(result.is_error);
}

#[tokio::test]
async fn test_out_of_range_max_results_is_error_flagged() {
    let mock_server = MockServer::start().await;
    let tool = SearchTool::new(create_test_searcher(&mock_server));

    let result = tool
        .call(TOOL_NAME, &json!({"query": "rust", "max_results": 50}))
        .await;

    assert!(result.is_error);
    assert!(result.text().contains("max_results"));
}

#[tokio::test]
async fn test_network_failure_is_not_error_flagged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let tool = SearchTool::new(create_test_searcher(&mock_server));
    let result = tool
        .call(TOOL_NAME, &json!({"query": "Python入門", "max_results": 3}))
        .await;

    assert!(!result.is_error);
    let text = result.text();
    assert!(text.starts_with("「Python入門」の検索結果（3件）:\n\n"));
    assert!(text.contains("1. **Python.org - 公式サイト**"));
    assert!(text.contains("   URL: https://docs.python.org/ja/3/tutorial/"));
}

#[test]
fn test_descriptor_lists_search_tool() {
    let value = serde_json::to_value(descriptor()).unwrap();

    assert_eq!(value["name"], TOOL_NAME);
    assert_eq!(value["inputSchema"]["type"], "object");
    assert_eq!(value["inputSchema"]["properties"]["query"]["type"], "string");
    assert_eq!(
        value["inputSchema"]["properties"]["max_results"]["minimum"],
        1
    );
}
