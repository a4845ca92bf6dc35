//! Payload text for tool results

use crate::search::SearchResult;

/// Renders results in the layout existing clients parse
///
/// ```text
/// 「{query}」の検索結果（{N}件）:
///
/// 1. **{title}**
///    URL: {url}
///    要約: {snippet}
/// ```
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    let blocks: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "{}. **{}**\n   URL: {}\n   要約: {}\n",
                i + 1,
                result.title,
                result.url,
                result.snippet
            )
        })
        .collect();

    format!(
        "「{}」の検索結果（{}件）:\n\n{}",
        query,
        results.len(),
        blocks.join("\n")
    )
}
