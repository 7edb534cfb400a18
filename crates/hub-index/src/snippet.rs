//! Snippet extraction and term highlighting.

use regex::{Captures, Regex};

use crate::normalize_query;

/// Default marker opening a highlighted term.
pub const MARK_OPEN: &str = "<mark>";
/// Default marker closing a highlighted term.
pub const MARK_CLOSE: &str = "</mark>";

/// Cuts a display snippet of about `window` characters around `match_index`.
///
/// `match_index` is a character offset into `content`. The window starts half a window before
/// the match. Markdown markers (`#`, `*`, `` ` ``, `_`) are dropped, newline runs become one
/// space, and `...` marks each side where text was cut.
pub fn extract_snippet(content: &str, match_index: usize, window: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    let start = match_index.saturating_sub(window / 2).min(len);
    let end = start.saturating_add(window).min(len);

    let raw: String = chars[start..end].iter().collect();
    let body = clean(&raw);

    let mut snippet = String::with_capacity(body.len() + 6);
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&body);
    if end < len {
        snippet.push_str("...");
    }
    snippet
}

/// Strips markdown markers and flattens newlines.
fn clean(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_newlines = false;
    for c in raw.chars() {
        match c {
            '#' | '*' | '`' | '_' => continue,
            '\n' => {
                if !in_newlines {
                    out.push(' ');
                }
                in_newlines = true;
                continue;
            }
            _ => out.push(c),
        }
        in_newlines = false;
    }
    out.trim().to_string()
}

/// Wraps every case-insensitive occurrence of each query term in `<mark>` tags.
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, MARK_OPEN, MARK_CLOSE)
}

/// Wraps every case-insensitive occurrence of each query term in custom markers.
///
/// Terms are applied one after another, each over the output of the previous one.
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = text.to_string();
    for term in normalize_query(query) {
        let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(&term))) else {
            continue;
        };
        out = re
            .replace_all(&out, |caps: &Captures<'_>| format!("{open}{}{close}", &caps[0]))
            .into_owned();
    }
    out
}

/// Wraps every case-insensitive occurrence of any query term in markers, in a single pass.
///
/// Inserted markers are never rescanned, so markers that contain term text (ANSI escapes, for
/// instance) stay intact. Where terms overlap, the longest one wins.
pub fn highlight_once(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut terms = normalize_query(query);
    if terms.is_empty() {
        return text.to_string();
    }
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    let pattern = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(re) = Regex::new(&format!("(?i){pattern}")) else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures<'_>| format!("{open}{}{close}", &caps[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_has_no_ellipses() {
        assert_eq!(extract_snippet("## Retries\nBack off.", 3, 150), "Retries Back off.");
    }

    #[test]
    fn test_match_near_start() {
        let content = "a".repeat(300);
        let snippet = extract_snippet(&content, 10, 150);
        assert!(!snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.len(), 153);
    }

    #[test]
    fn test_match_in_middle() {
        let content = "b".repeat(400);
        let snippet = extract_snippet(&content, 200, 150);
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().filter(|&c| c == 'b').count(), 150);
    }

    #[test]
    fn test_match_near_end() {
        let content = "c".repeat(200);
        let snippet = extract_snippet(&content, 190, 150);
        assert!(snippet.starts_with("..."));
        assert!(!snippet.ends_with("..."));
        assert_eq!(snippet.len(), 3 + 85);
    }

    #[test]
    fn test_markers_stripped_and_newlines_collapsed() {
        let content = "# Title\n\n\n**bold** and `code` with snake_case";
        assert_eq!(
            extract_snippet(content, 0, 150),
            "Title bold and code with snakecase"
        );
    }

    #[test]
    fn test_marker_only_lines_do_not_split_newline_runs() {
        assert_eq!(extract_snippet("text\n```\ncode", 0, 150), "text code");
        assert_eq!(extract_snippet("one\n#\n***\n\ntwo", 0, 150), "one two");
    }

    #[test]
    fn test_multibyte_positions_are_characters() {
        let content = format!("{}ünïcödé token", "é".repeat(100));
        let at = content.chars().position(|c| c == 't').unwrap();
        let snippet = extract_snippet(&content, at, 20);
        assert!(snippet.contains("token"));
        assert!(snippet.starts_with("..."));
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        assert_eq!(extract_snippet("short", 500, 150), "...");
    }

    #[test]
    fn test_highlight_default_markers() {
        assert_eq!(
            highlight("Token handling for API tokens", "token"),
            "<mark>Token</mark> handling for API <mark>token</mark>s"
        );
    }

    #[test]
    fn test_highlight_multiple_terms() {
        assert_eq!(
            highlight("API Token Handling", "api handling"),
            "<mark>API</mark> Token <mark>Handling</mark>"
        );
    }

    #[test]
    fn test_highlight_escapes_metacharacters() {
        assert_eq!(highlight("use c++ or c#", "c++"), "use <mark>c++</mark> or c#");
        assert_eq!(highlight("a.b axb", "a.b"), "<mark>a.b</mark> axb");
    }

    #[test]
    fn test_highlight_custom_markers() {
        assert_eq!(highlight_with("Retry later", "retry", "[", "]"), "[Retry] later");
    }

    #[test]
    fn test_highlight_once_leaves_markers_alone() {
        let open = "\x1b[1;7m";
        let close = "\x1b[0m";
        assert_eq!(
            highlight_once("the token", "token 7 m", open, close),
            format!("the {open}token{close}")
        );
    }

    #[test]
    fn test_highlight_once_prefers_longer_terms() {
        assert_eq!(
            highlight_once("api tokens", "token tokens", "[", "]"),
            "api [tokens]"
        );
        assert_eq!(highlight_once("same", "  ", "[", "]"), "same");
    }

    #[test]
    fn test_highlight_empty_query_is_identity() {
        assert_eq!(highlight("unchanged", "   "), "unchanged");
    }
}
