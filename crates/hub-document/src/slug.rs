//! GitHub-compatible heading slugs.
//!
//! Slugs become the `id` attribute of rendered headings and the section part of subtopic
//! references such as `api-testing#token-handling`.

use std::collections::HashMap;

/// Generates unique slugs for a sequence of headings in one document.
#[derive(Debug, Default)]
pub struct Slugifier {
    /// How many times each base slug has been handed out.
    counts: HashMap<String, usize>,
}

impl Slugifier {
    /// Creates a slugifier with no prior slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug for `heading`, suffixed `-N` if the same base slug was seen before.
    pub fn slugify(&mut self, heading: &str) -> String {
        let base = base_slug(heading);
        let seen = self.counts.entry(base.clone()).or_insert(0);
        *seen += 1;
        match *seen {
            1 => base,
            n => format!("{base}-{}", n - 1),
        }
    }
}

/// Lowercases, keeps ASCII alphanumerics and `_`, maps spaces and hyphens to single hyphens.
fn base_slug(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for c in heading.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c.to_ascii_lowercase());
        } else if (c == ' ' || c == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "heading".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("Pipeline Stages"), "pipeline-stages");
    }

    #[test]
    fn test_punctuation_removed() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("CI/CD: What & Why?"), "cicd-what-why");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("  Before -- after  "), "before-after");
    }

    #[test]
    fn test_underscore_and_digits_kept() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("HTTP_2 in 2024"), "http_2-in-2024");
    }

    #[test]
    fn test_empty_falls_back() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("!!!"), "heading");
        assert_eq!(s.slugify(""), "heading-1");
    }

    #[test]
    fn test_duplicates_get_suffixes() {
        let mut s = Slugifier::new();
        assert_eq!(s.slugify("Overview"), "overview");
        assert_eq!(s.slugify("Overview"), "overview-1");
        assert_eq!(s.slugify("overview"), "overview-2");
    }
}
