//! Tool surface for an external orchestrator
//!
//! This module exposes the search pipeline as the `search_duckduckgo` tool:
//! - The tool descriptor with its JSON input schema
//! - Argument validation
//! - Dispatch with the "always answer" error policy
//!
//! Protocol framing and transport belong to the host; everything here works on
//! plain `serde_json::Value` arguments and returns a serializable result.

mod format;

pub use format::format_results;

use crate::search::{
    max_results_out_of_range, SearchRequest, Searcher, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT,
};
use crate::SearchError;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tokio_util::sync::CancellationToken;

/// Name the tool is registered under
pub const TOOL_NAME: &str = "search_duckduckgo";

/// Server identity reported to hosts
pub const SERVER_NAME: &str = "duckduckgo-search";
pub const SERVER_VERSION: &str = "1.0.0";

const INTERNAL_ERROR_MESSAGE: &str = "内部エラーが発生しました";

/// Tool metadata as listed to the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// One text block of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Result of a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<TextContent>,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_flag(text.into(), false)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_flag(text.into(), true)
    }

    fn with_flag(text: String, is_error: bool) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_string(),
                text,
            }],
            is_error,
        }
    }

    /// All text blocks joined together
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchArguments {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    max_results: Option<i64>,
}

/// Describes the search tool
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: "DuckDuckGoで検索を実行し、結果を取得する".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "検索クエリ"
                },
                "max_results": {
                    "type": "integer",
                    "description": "最大結果数（デフォルト: 10）",
                    "default": DEFAULT_MAX_RESULTS,
                    "minimum": 1,
                    "maximum": MAX_RESULTS_LIMIT
                }
            },
            "required": ["query"]
        }),
    }
}

/// Validates raw tool arguments into a request
///
/// `null` is treated as an empty argument object.
pub fn parse_arguments(arguments: &Value) -> Result<SearchRequest, SearchError> {
    let args = if arguments.is_null() {
        SearchArguments::default()
    } else {
        SearchArguments::deserialize(arguments)
            .map_err(|e| SearchError::Validation(format!("引数が不正です: {}", e)))?
    };

    let query = args.query.unwrap_or_default();
    match args.max_results {
        None => SearchRequest::with_default_limit(query),
        Some(n) => {
            let max_results = usize::try_from(n).map_err(|_| max_results_out_of_range(n))?;
            SearchRequest::new(query, max_results)
        }
    }
}

/// The search tool, bound to one searcher
#[derive(Debug, Clone)]
pub struct SearchTool {
    searcher: Searcher,
}

impl SearchTool {
    pub fn new(searcher: Searcher) -> Self {
        Self { searcher }
    }

    /// Handles a tool call
    ///
    /// Only validation problems and internal faults come back error-flagged;
    /// acquisition failures are answered with fallback results.
    pub async fn call(&self, name: &str, arguments: &Value) -> ToolResult {
        self.dispatch(name, arguments, None).await
    }

    /// Handles a tool call that the host may cancel
    ///
    /// A cancelled call comes back error-flagged instead of hanging.
    pub async fn call_with_cancel(
        &self,
        name: &str,
        arguments: &Value,
        token: &CancellationToken,
    ) -> ToolResult {
        self.dispatch(name, arguments, Some(token)).await
    }

    async fn dispatch(
        &self,
        name: &str,
        arguments: &Value,
        token: Option<&CancellationToken>,
    ) -> ToolResult {
        if name != TOOL_NAME {
            tracing::warn!(tool = name, "Unknown tool requested");
            return ToolResult::error(format!("未知のツール: {}", name));
        }

        guarded(self.run_search(arguments, token)).await
    }

    async fn run_search(
        &self,
        arguments: &Value,
        token: Option<&CancellationToken>,
    ) -> Result<String, SearchError> {
        let request = parse_arguments(arguments)?;
        tracing::info!(query = request.query(), max_results = request.max_results(), "Running search");

        let results = match token {
            Some(token) => self.searcher.search_with_cancel(&request, token).await?,
            None => self.searcher.search(&request).await,
        };

        Ok(format_results(request.query(), &results))
    }
}

/// Maps a search outcome onto a tool result, turning panics into an internal-error payload
async fn guarded<F>(search: F) -> ToolResult
where
    F: Future<Output = Result<String, SearchError>>,
{
    match AssertUnwindSafe(search).catch_unwind().await {
        Ok(Ok(text)) => ToolResult::success(text),
        Ok(Err(e)) => {
            let message = format!("検索エラー: {}", e);
            tracing::error!("{}", message);
            ToolResult::error(message)
        }
        Err(_) => {
            tracing::error!("Search pipeline panicked");
            ToolResult::error(format!("検索エラー: {}", INTERNAL_ERROR_MESSAGE))
        }
    }
}
