//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use hub_highlight::colors;
pub use hub_highlight::{dim, header, rule, subheader, success, warning};
use hub_index::{SearchResult, SnippetKind, highlight_once};
use serde::Serialize;

/// JSON output for a search.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Number of results returned.
    total_matches: usize,
    /// Ranked results.
    results: &'a [SearchResult],
}

/// Serializes `value` as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search results as JSON.
pub fn print_results_json(query: &str, results: &[SearchResult]) -> ExitCode {
    print_json(&JsonSearchOutput {
        query,
        total_matches: results.len(),
        results,
    })
}

/// Prints search results for a terminal, or a no-results line.
pub fn print_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("{}", dim(&format!("No results found for '{query}'")));
        return;
    }
    for result in results {
        print!("{}", format_result(result, query));
    }
}

/// Formats one result: title line, locator, then highlighted snippets.
pub fn format_result(result: &SearchResult, query: &str) -> String {
    let mut out = format!(
        "{} {}\n",
        header(&result.section_title),
        dim(&format!("({})", result.topic_title))
    );
    out.push_str(&format!(
        "   {} {}\n",
        dim(&result.key().to_string()),
        dim(&format!("score {}", result.relevance_score))
    ));
    for snippet in &result.matched_snippets {
        // Title snippets repeat the heading already printed above.
        if snippet.kind == SnippetKind::Title {
            continue;
        }
        out.push_str("   ");
        out.push_str(&highlight_once(
            &snippet.text,
            query,
            colors::MARK,
            colors::RESET,
        ));
        out.push('\n');
    }
    out.push('\n');
    out
}
