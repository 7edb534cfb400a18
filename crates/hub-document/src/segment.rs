//! Line-based markdown segmentation.
//!
//! Splits a markdown document into sections at ATX heading lines. Every line that starts with
//! `#` opens a new section, whatever its level, so the split is flat rather than hierarchical.
//! Text before the first heading has no title to attach to and is not indexed.

use crate::{Section, Slugifier};

/// A section being accumulated while scanning lines.
struct OpenSection {
    /// Title taken from the heading line that opened the section.
    title: String,
    /// Ordinal assigned when the heading was seen.
    index: usize,
    /// Heading line plus every following line, newline-joined.
    content: String,
}

/// Returns true if `line` is a heading boundary.
pub fn is_heading_line(line: &str) -> bool {
    line.starts_with('#')
}

/// Returns the heading text of a heading line, without markers or surrounding whitespace.
pub fn heading_text(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

/// Splits `markdown` into sections.
///
/// Section indices start at 1 and advance on every heading line, so they stay stable even when
/// a section is dropped for having no content.
pub fn segment(topic_id: &str, topic_title: &str, markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<OpenSection> = None;
    let mut next_index = 0;

    let mut emit = |open: OpenSection| {
        if open.content.trim().is_empty() {
            return;
        }
        sections.push(Section {
            topic_id: topic_id.to_string(),
            topic_title: topic_title.to_string(),
            section_title: open.title,
            section_index: open.index,
            content: open.content,
        });
    };

    for line in markdown.split('\n') {
        if is_heading_line(line) {
            if let Some(open) = current.take() {
                emit(open);
            }
            next_index += 1;
            current = Some(OpenSection {
                title: heading_text(line).to_string(),
                index: next_index,
                content: line.to_string(),
            });
        } else if let Some(open) = current.as_mut() {
            open.content.push('\n');
            open.content.push_str(line);
        }
    }

    if let Some(open) = current {
        emit(open);
    }

    sections
}

/// Finds the section whose heading slugifies to `slug`.
///
/// Slugs are assigned in document order with the same duplicate suffixes the renderer uses.
pub fn find_by_slug<'a>(sections: &'a [Section], slug: &str) -> Option<&'a Section> {
    let mut slugifier = Slugifier::new();
    sections
        .iter()
        .find(|section| slugifier.slugify(&section.section_title) == slug)
}
