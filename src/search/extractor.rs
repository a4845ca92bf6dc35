//! Result extraction from the HTML results page
//!
//! This is a line-oriented scan, not a DOM parse. The results page renders
//! each hit's title anchor on one line and its snippet anchor on a later line,
//! so the scanner works line by line:
//!
//! 1. A line holding both [`TITLE_MARKER`] and `href=` is a title candidate.
//! 2. The URL is the text between `href="` and the next `"`.
//! 3. The title is the text between the first `>` after the marker and the
//!    next `</a>`, with tags stripped and entities decoded.
//! 4. The snippet comes from the first line within [`SNIPPET_WINDOW`] lines
//!    below that holds both [`SNIPPET_MARKER`] and `href=`, cut the same way.
//!
//! This depends on the page keeping each anchor on a single line. If the
//! markup is reflowed, extraction comes back empty and the pipeline falls
//! back; it does not try to guess a different structure.

use crate::search::SearchResult;
use regex::Regex;
use std::sync::LazyLock;

/// Class attribute of a result's title anchor
pub const TITLE_MARKER: &str = r#"class="result__a""#;

/// Class attribute of a result's snippet anchor
pub const SNIPPET_MARKER: &str = r#"class="result__snippet""#;

/// How far below a title line the snippet may appear (exclusive)
pub const SNIPPET_WINDOW: usize = 50;

/// Snippet used when none is found for a result
pub const NO_SNIPPET_PLACEHOLDER: &str = "（要約なし）";

const HREF_TOKEN: &str = "href=";
const HREF_OPEN: &str = "href=\"";
const ANCHOR_CLOSE: &str = "</a>";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Why a candidate line was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseSkip {
    MissingHref,
    UnterminatedHref,
    MissingTagClose,
    UnterminatedAnchor,
    EmptyField,
}

/// Extracts up to `max_results` results from a results page, in page order
///
/// Never fails: malformed candidates are skipped and scanning continues.
pub fn extract(html: &str, max_results: usize) -> Vec<SearchResult> {
    let lines: Vec<&str> = html.split('\n').map(str::trim).collect();
    let mut results = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if results.len() >= max_results {
            break;
        }

        if !is_marker_line(line, TITLE_MARKER) {
            continue;
        }

        match parse_title_line(line) {
            Ok((url, title)) => {
                let snippet = find_snippet(&lines, index)
                    .unwrap_or_else(|| NO_SNIPPET_PLACEHOLDER.to_string());
                results.push(SearchResult {
                    title,
                    url,
                    snippet,
                });
            }
            Err(skip) => {
                tracing::debug!(line = index, reason = ?skip, "Skipping result candidate");
            }
        }
    }

    results
}

/// Strips tags and decodes the entities the results page emits
///
/// `&amp;` is decoded first, so `&amp;lt;` ends up as `<`.
pub fn clean_html(text: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(text, "");
    stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .trim()
        .to_string()
}

fn is_marker_line(line: &str, marker: &str) -> bool {
    line.contains(marker) && line.contains(HREF_TOKEN)
}

/// Cuts `(url, title)` out of a title line
fn parse_title_line(line: &str) -> Result<(String, String), ParseSkip> {
    let url_start = line.find(HREF_OPEN).ok_or(ParseSkip::MissingHref)? + HREF_OPEN.len();
    let url_len = line[url_start..]
        .find('"')
        .ok_or(ParseSkip::UnterminatedHref)?;
    let url = line[url_start..url_start + url_len].to_string();

    let title = clean_html(anchor_text(line, TITLE_MARKER)?);

    if url.is_empty() || title.is_empty() {
        return Err(ParseSkip::EmptyField);
    }

    Ok((url, title))
}

/// Looks for the snippet belonging to the title on line `title_index`
fn find_snippet(lines: &[&str], title_index: usize) -> Option<String> {
    let window_end = (title_index + SNIPPET_WINDOW).min(lines.len());

    for (offset, line) in lines[title_index + 1..window_end].iter().enumerate() {
        if !is_marker_line(line, SNIPPET_MARKER) {
            continue;
        }

        match anchor_text(line, SNIPPET_MARKER) {
            Ok(raw) => {
                let snippet = clean_html(raw);
                return if snippet.is_empty() { None } else { Some(snippet) };
            }
            Err(skip) => {
                tracing::debug!(
                    line = title_index + 1 + offset,
                    reason = ?skip,
                    "Skipping snippet candidate"
                );
            }
        }
    }

    None
}

/// Raw text between the first `>` following `marker` and the next `</a>`
fn anchor_text<'a>(line: &'a str, marker: &str) -> Result<&'a str, ParseSkip> {
    let marker_at = line.find(marker).ok_or(ParseSkip::MissingTagClose)?;
    let text_start = marker_at
        + line[marker_at..]
            .find('>')
            .ok_or(ParseSkip::MissingTagClose)?
        + 1;
    let text_len = line[text_start..]
        .find(ANCHOR_CLOSE)
        .ok_or(ParseSkip::UnterminatedAnchor)?;
    Ok(&line[text_start..text_start + text_len])
}
