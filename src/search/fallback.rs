//! Deterministic fallback results
//!
//! Used when the results page cannot be fetched or yields nothing. Results are
//! picked from a fixed topic table by keyword, or templated from the query
//! when no topic matches. No network access happens here.

use crate::search::SearchResult;

struct FallbackEntry {
    title: &'static str,
    url: &'static str,
    snippet: &'static str,
}

struct Topic {
    /// Matched by substring against the lower-cased query
    keywords: &'static [&'static str],
    entries: &'static [FallbackEntry],
}

/// Checked in order; the first topic with a matching keyword wins
const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["python"],
        entries: &[
            FallbackEntry {
                title: "Python.org - 公式サイト",
                url: "https://www.python.org/",
                snippet: "Pythonは、シンプルで学びやすく、強力なプログラミング言語です。",
            },
            FallbackEntry {
                title: "Python チュートリアル",
                url: "https://docs.python.org/ja/3/tutorial/",
                snippet: "Python の公式チュートリアルです。基本的な概念と機能を学ぶことができます。",
            },
            FallbackEntry {
                title: "Python入門ガイド",
                url: "https://example.com/python-guide",
                snippet: "Pythonプログラミングを始めるための包括的なガイドです。",
            },
        ],
    },
    Topic {
        keywords: &["機械学習", "machine learning"],
        entries: &[
            FallbackEntry {
                title: "機械学習入門ガイド",
                url: "https://example.com/ml-guide",
                snippet: "機械学習の基本概念とアルゴリズムについて学ぶことができます。",
            },
            FallbackEntry {
                title: "scikit-learn - 機械学習ライブラリ",
                url: "https://scikit-learn.org/",
                snippet: "Pythonの機械学習ライブラリで、多くのアルゴリズムが実装されています。",
            },
            FallbackEntry {
                title: "機械学習コース",
                url: "https://example.com/ml-course",
                snippet: "オンラインで学べる機械学習のコースです。",
            },
        ],
    },
    Topic {
        keywords: &["天気", "weather"],
        entries: &[
            FallbackEntry {
                title: "気象庁 | 天気予報",
                url: "https://www.jma.go.jp/jp/yoho/",
                snippet: "気象庁による正確な天気予報情報を提供しています。",
            },
            FallbackEntry {
                title: "Yahoo!天気・災害",
                url: "https://weather.yahoo.co.jp/",
                snippet: "詳細な天気予報と災害情報を提供するサービスです。",
            },
            FallbackEntry {
                title: "ウェザーニュース",
                url: "https://weathernews.jp/",
                snippet: "最新の気象情報とピンポイント天気予報をお届けします。",
            },
        ],
    },
];

/// Produces placeholder results for `query`, at most `max_results` of them
pub fn fallback(query: &str, max_results: usize) -> Vec<SearchResult> {
    tracing::info!(query, "Generating fallback results");

    let lowered = query.to_lowercase();
    let topic = TOPICS
        .iter()
        .find(|topic| topic.keywords.iter().any(|kw| lowered.contains(kw)));

    let results = match topic {
        Some(topic) => topic
            .entries
            .iter()
            .map(|e| SearchResult::new(e.title, e.url, e.snippet))
            .collect(),
        None => generic_results(query),
    };

    results.into_iter().take(max_results).collect()
}

fn generic_results(query: &str) -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            format!("「{}」に関する情報 - Wikipedia", query),
            format!("https://ja.wikipedia.org/wiki/{}", query),
            format!("「{}」についての詳細な情報を提供する百科事典記事です。", query),
        ),
        SearchResult::new(
            format!("「{}」の検索結果", query),
            "https://example.com/search",
            format!("「{}」に関連する情報とリソースのコレクションです。", query),
        ),
        SearchResult::new(
            format!("「{}」について学ぶ", query),
            "https://example.com/learn",
            format!("「{}」に関する学習リソースとガイドです。", query),
        ),
    ]
}
