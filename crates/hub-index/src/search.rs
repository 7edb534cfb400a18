//! Query evaluation over a [`SearchIndex`].
//!
//! Scoring is plain substring matching with fixed weights per field. Every query term is
//! checked independently against the section title, the topic title and the section content,
//! and the weights of all hits are summed:
//!
//! | field         | weight | snippet                         |
//! |---------------|--------|---------------------------------|
//! | section title | 10     | the full section title          |
//! | topic title   | 8      | none                            |
//! | content       | 1      | window around first occurrence  |
//!
//! Results are sorted by descending score. The sort is stable, so equal scores keep index
//! insertion order.

use hub_config::SearchSettings;
use serde::Serialize;

use crate::{IndexedSection, SearchIndex, SectionKey, extract_snippet};

/// Score for a term found in the section title.
pub const TITLE_WEIGHT: u32 = 10;
/// Score for a term found in the topic title.
pub const TOPIC_WEIGHT: u32 = 8;
/// Score for a term found in the section content.
pub const CONTENT_WEIGHT: u32 = 1;

/// Knobs for a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of results.
    pub limit: usize,
    /// Maximum snippets per result.
    pub max_snippets: usize,
    /// Content snippet window, in characters.
    pub snippet_window: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchParams {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            limit: settings.limit,
            max_snippets: settings.max_snippets,
            snippet_window: settings.snippet_window,
        }
    }
}

/// Which field a snippet was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetKind {
    /// The section title matched.
    Title,
    /// The section content matched.
    Content,
}

/// Display text explaining why a section matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Field the snippet came from.
    #[serde(rename = "type")]
    pub kind: SnippetKind,
    /// The query term that matched.
    pub term: String,
    /// Text to display.
    pub text: String,
}

/// A ranked section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Topic id.
    pub topic_id: String,
    /// Topic display title.
    pub topic_title: String,
    /// Section heading text.
    pub section_title: String,
    /// Section ordinal within the topic.
    pub section_index: usize,
    /// Sum of field weights for all matching terms.
    pub relevance_score: u32,
    /// Snippets in discovery order.
    pub matched_snippets: Vec<Snippet>,
}

impl SearchResult {
    /// Key of the matched section.
    pub fn key(&self) -> SectionKey {
        SectionKey::new(self.topic_id.clone(), self.section_index)
    }
}

/// Lower-cases, trims and splits a raw query into terms.
pub fn normalize_query(raw: &str) -> Vec<String> {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs `raw_query` against `index`.
///
/// An empty query or an empty index yields no results.
pub fn search(index: &SearchIndex, raw_query: &str, params: &SearchParams) -> Vec<SearchResult> {
    let terms = normalize_query(raw_query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = index
        .entries()
        .iter()
        .filter_map(|entry| score_section(entry, &terms, params))
        .collect();

    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    results.truncate(params.limit);
    results
}

/// Scores one section, returning `None` if no term matched anywhere.
fn score_section(
    entry: &IndexedSection,
    terms: &[String],
    params: &SearchParams,
) -> Option<SearchResult> {
    let section = entry.section();
    let mut score = 0;
    let mut snippets = Vec::new();

    for term in terms {
        if entry.title_lower.contains(term.as_str()) {
            score += TITLE_WEIGHT;
            snippets.push(Snippet {
                kind: SnippetKind::Title,
                term: term.clone(),
                text: section.section_title.clone(),
            });
        }

        if entry.topic_title_lower.contains(term.as_str()) {
            score += TOPIC_WEIGHT;
        }

        if let Some(byte_pos) = entry.content_lower.find(term.as_str()) {
            score += CONTENT_WEIGHT;
            // Offsets into the lower-cased copy are mapped to characters, which is what the
            // original-case copy is cut by.
            let char_pos = entry.content_lower[..byte_pos].chars().count();
            snippets.push(Snippet {
                kind: SnippetKind::Content,
                term: term.clone(),
                text: extract_snippet(&section.content, char_pos, params.snippet_window),
            });
        }
    }

    if score == 0 {
        return None;
    }
    snippets.truncate(params.max_snippets);

    Some(SearchResult {
        topic_id: section.topic_id.clone(),
        topic_title: section.topic_title.clone(),
        section_title: section.section_title.clone(),
        section_index: section.section_index,
        relevance_score: score,
        matched_snippets: snippets,
    })
}
