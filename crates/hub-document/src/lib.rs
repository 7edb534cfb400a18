//! Markdown handling for the learning hub.
//!
//! This crate turns topic markdown into the two shapes the rest of the hub needs:
//! - Flat sections split at every heading line, which are the unit of search
//! - An HTML rendering with slug anchors on headings, for display

#![warn(missing_docs)]

mod error;
mod render;
mod segment;
mod slug;

use std::{fs, path::Path};

pub use error::DocumentError;
pub use render::{HeadingAnchor, RenderedPage, page_html, render_html};
pub use segment::{find_by_slug, heading_text, is_heading_line, segment};
use serde::Serialize;
pub use slug::Slugifier;

/// One heading-delimited slice of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Id of the topic the section belongs to.
    pub topic_id: String,
    /// Display title of that topic.
    pub topic_title: String,
    /// Heading text with the `#` markers removed.
    pub section_title: String,
    /// 1-based ordinal of the heading within the topic.
    pub section_index: usize,
    /// Heading line and body, newline-joined.
    pub content: String,
}

/// A topic's markdown source.
#[derive(Debug, Clone)]
pub struct Document {
    /// Topic id.
    pub topic_id: String,
    /// Topic display title.
    pub title: String,
    /// Raw markdown.
    pub markdown: String,
}

impl Document {
    /// Creates a document from markdown already in memory.
    pub fn new(
        topic_id: impl Into<String>,
        title: impl Into<String>,
        markdown: impl Into<String>,
    ) -> Self {
        Self {
            topic_id: topic_id.into(),
            title: title.into(),
            markdown: markdown.into(),
        }
    }

    /// Reads a document from disk.
    pub fn load(path: &Path, topic_id: &str, title: &str) -> Result<Self, DocumentError> {
        let markdown = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(topic_id, title, markdown))
    }

    /// Splits the document into searchable sections.
    pub fn sections(&self) -> Vec<Section> {
        segment(&self.topic_id, &self.title, &self.markdown)
    }

    /// Renders the document to HTML.
    pub fn render(&self) -> RenderedPage {
        render_html(&self.markdown)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_document_sections() {
        let doc = Document::new(
            "api-testing",
            "API Testing Fundamentals",
            "# Token Handling\nUse a bearer token.\n# Retries\nBack off.",
        );
        let sections = doc.sections();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].topic_id, "api-testing");
        assert_eq!(sections[0].topic_title, "API Testing Fundamentals");
        assert_eq!(sections[1].section_title, "Retries");
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ci-cd-pipelines.md");
        fs::write(&path, "# Stages\nBuild, test, deploy.\n").unwrap();

        let doc = Document::load(&path, "ci-cd-pipelines", "CI/CD Pipelines").unwrap();
        assert_eq!(doc.markdown, "# Stages\nBuild, test, deploy.\n");
        assert_eq!(doc.render().headings[0].slug, "stages");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(&dir.path().join("nope.md"), "nope", "Nope").unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
        assert!(err.to_string().contains("nope.md"));
    }
}
