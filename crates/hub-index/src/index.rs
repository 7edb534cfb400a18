//! The in-memory section index.

use std::{collections::HashMap, fmt};

use hub_document::Section;

/// Identifies a section across all topics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionKey {
    /// Topic the section belongs to.
    pub topic_id: String,
    /// Ordinal of the section within its topic.
    pub section_index: usize,
}

impl SectionKey {
    /// Creates a key.
    pub fn new(topic_id: impl Into<String>, section_index: usize) -> Self {
        Self {
            topic_id: topic_id.into(),
            section_index,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.topic_id, self.section_index)
    }
}

impl From<&Section> for SectionKey {
    fn from(section: &Section) -> Self {
        Self::new(section.topic_id.clone(), section.section_index)
    }
}

/// A section with lower-cased copies of the fields used for matching.
#[derive(Debug, Clone)]
pub struct IndexedSection {
    /// The original section, used for display.
    section: Section,
    /// Lower-cased section title.
    pub(crate) title_lower: String,
    /// Lower-cased topic title.
    pub(crate) topic_title_lower: String,
    /// Lower-cased content.
    pub(crate) content_lower: String,
}

impl IndexedSection {
    /// Wraps a section, computing its match caches.
    fn new(section: Section) -> Self {
        Self {
            title_lower: section.section_title.to_lowercase(),
            topic_title_lower: section.topic_title.to_lowercase(),
            content_lower: section.content.to_lowercase(),
            section,
        }
    }

    /// The indexed section.
    pub fn section(&self) -> &Section {
        &self.section
    }
}

/// Sections keyed by `(topic_id, section_index)`, iterated in insertion order.
///
/// Insertion order is the tie-break order for equal scores, so the index keeps a vector of
/// entries and a key map into it rather than a bare hash map.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Entries in insertion order.
    entries: Vec<IndexedSection>,
    /// Key -> position in `entries`.
    positions: HashMap<SectionKey, usize>,
}

impl SearchIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section. A section with the same key is replaced in place.
    pub fn insert(&mut self, section: Section) {
        let key = SectionKey::from(&section);
        let entry = IndexedSection::new(section);
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Looks up a section by key.
    pub fn get(&self, key: &SectionKey) -> Option<&Section> {
        self.positions
            .get(key)
            .map(|&pos| self.entries[pos].section())
    }

    /// Number of indexed sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct topics with at least one section.
    pub fn topic_count(&self) -> usize {
        let mut seen: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.section.topic_id.as_str())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().map(IndexedSection::section)
    }

    /// Entries in insertion order.
    pub(crate) fn entries(&self) -> &[IndexedSection] {
        &self.entries
    }
}

impl FromIterator<Section> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut index = Self::new();
        for section in iter {
            index.insert(section);
        }
        index
    }
}
