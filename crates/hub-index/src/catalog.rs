//! The topic registry as seen by navigation and the index builder.
//!
//! A catalog knows the ordered topics, their aliases and which topic files are actually
//! available. Availability is a static allow-list of file stems: either given explicitly in
//! configuration or derived once from the `*.md` files under the content directory.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use hub_config::{Config, Topic};
use walkdir::WalkDir;

use crate::IndexError;

/// Longest title shown on previous/next navigation before truncation.
pub const NAV_TITLE_MAX: usize = 22;

/// A resolved topic reference, possibly pointing into a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRef<'a> {
    /// The registry topic.
    pub topic: &'a Topic,
    /// Heading slug of the referenced section, if any.
    pub section: Option<String>,
}

/// Topics sharing one sidebar group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup<'a> {
    /// Group label; `None` for ungrouped topics.
    pub label: Option<&'a str>,
    /// Member topics in registry order.
    pub topics: Vec<&'a Topic>,
}

/// Ordered topic registry with alias resolution and availability.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    /// Topics in registry order.
    topics: Vec<Topic>,
    /// Alias -> topic id.
    aliases: BTreeMap<String, String>,
    /// File stems known to exist.
    available: BTreeSet<String>,
}

impl TopicCatalog {
    /// Creates a catalog from its parts.
    pub fn new(
        topics: Vec<Topic>,
        aliases: BTreeMap<String, String>,
        available: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            topics,
            aliases,
            available: available.into_iter().collect(),
        }
    }

    /// Builds a catalog from configuration.
    ///
    /// Without an explicit `available` list the content directory is scanned.
    pub fn from_config(config: &Config) -> Result<Self, IndexError> {
        let available = match &config.site.available {
            Some(list) => list.iter().cloned().collect(),
            None => scan_available(&config.site.content_dir)?,
        };
        Ok(Self::new(
            config.topics.clone(),
            config.aliases.clone(),
            available,
        ))
    }

    /// Topics in registry order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Looks up a topic by id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Returns true if the topic's backing file is on the allow-list.
    pub fn exists(&self, topic_id: &str) -> bool {
        self.topic(topic_id)
            .is_some_and(|topic| self.available.contains(&topic.file))
    }

    /// Number of available file stems.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Resolves a user-supplied reference to a topic.
    ///
    /// Accepts a topic id, an alias, `{base}#{section}` or `{base}-{section}`. For the dashed
    /// form the longest matching topic id wins, so `api-testing-retries` resolves to
    /// `api-testing` rather than a topic named `api`.
    pub fn resolve(&self, reference: &str) -> Option<TopicRef<'_>> {
        let reference = reference.trim();
        let canonical = self.canonical(reference);

        if let Some(topic) = self.topic(canonical) {
            return Some(TopicRef {
                topic,
                section: None,
            });
        }

        if let Some((base, section)) = canonical.split_once('#') {
            if section.is_empty() {
                return None;
            }
            return self.topic(self.canonical(base)).map(|topic| TopicRef {
                topic,
                section: Some(section.to_string()),
            });
        }

        self.topics
            .iter()
            .filter_map(|topic| {
                let section = canonical.strip_prefix(topic.id.as_str())?.strip_prefix('-')?;
                (!section.is_empty()).then_some((topic, section))
            })
            .max_by_key(|(topic, _)| topic.id.len())
            .map(|(topic, section)| TopicRef {
                topic,
                section: Some(section.to_string()),
            })
    }

    /// Returns the topics before and after `topic_id` in registry order.
    pub fn neighbors(&self, topic_id: &str) -> (Option<&Topic>, Option<&Topic>) {
        let Some(pos) = self.topics.iter().position(|t| t.id == topic_id) else {
            return (None, None);
        };
        let prev = pos.checked_sub(1).and_then(|i| self.topics.get(i));
        (prev, self.topics.get(pos + 1))
    }

    /// Topics whose title contains `term`, case-insensitively.
    pub fn filter(&self, term: &str) -> Vec<&Topic> {
        let term = term.trim().to_lowercase();
        self.topics
            .iter()
            .filter(|t| term.is_empty() || t.title.to_lowercase().contains(&term))
            .collect()
    }

    /// Topics grouped by label, groups ordered by first appearance.
    pub fn groups(&self) -> Vec<TopicGroup<'_>> {
        group_topics(self.topics.iter())
    }

    /// Maps an alias to its topic id, or returns the input unchanged.
    fn canonical<'a>(&'a self, reference: &'a str) -> &'a str {
        self.aliases.get(reference).map_or(reference, String::as_str)
    }
}

/// Groups topics by label, preserving first-seen order of labels.
pub fn group_topics<'a>(topics: impl IntoIterator<Item = &'a Topic>) -> Vec<TopicGroup<'a>> {
    let mut groups: Vec<TopicGroup<'a>> = Vec::new();
    for topic in topics {
        let label = topic.group.as_deref();
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.topics.push(topic),
            None => groups.push(TopicGroup {
                label,
                topics: vec![topic],
            }),
        }
    }
    groups
}

/// Shortens `title` to at most `max` characters, ending in `...` when cut.
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let kept: String = title.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Lists the `*.md` file stems under `dir`, relative and `/`-separated.
///
/// A missing directory yields an empty list.
fn scan_available(dir: &Path) -> Result<BTreeSet<String>, IndexError> {
    let mut stems = BTreeSet::new();
    if !dir.exists() {
        return Ok(stems);
    }

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(IndexError::Scan {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            }
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(dir) else {
            continue;
        };
        if rel.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let stem = rel.with_extension("");
        let parts: Vec<_> = stem
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        stems.insert(parts.join("/"));
    }

    Ok(stems)
}
