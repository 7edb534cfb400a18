//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{collections::HashSet, fmt};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No topics are defined.
    NoTopicsDefined,
    /// The same topic id is declared more than once.
    DuplicateTopic {
        /// The repeated id.
        id: String,
    },
    /// An alias points at an id that is not in the registry.
    DanglingAlias {
        /// Alias name.
        alias: String,
        /// Target that does not exist.
        target: String,
    },
    /// The content directory does not exist.
    ContentDirMissing {
        /// Resolved directory path.
        path: String,
    },
    /// A topic has no markdown file in the content directory.
    TopicFileMissing {
        /// Topic id.
        id: String,
        /// Expected file path.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTopicsDefined => write!(f, "no topics are defined in configuration"),
            Self::DuplicateTopic { id } => write!(f, "topic '{id}' is declared more than once"),
            Self::DanglingAlias { alias, target } => {
                write!(f, "alias '{alias}' points to unknown topic '{target}'")
            }
            Self::ContentDirMissing { path } => {
                write!(f, "content directory does not exist: {path}")
            }
            Self::TopicFileMissing { id, path } => {
                write!(f, "topic '{id}' has no content file: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.topics.is_empty() {
        warnings.push(ConfigWarning::NoTopicsDefined);
        return warnings;
    }

    let mut seen = HashSet::new();
    for topic in &config.topics {
        if !seen.insert(topic.id.as_str()) {
            warnings.push(ConfigWarning::DuplicateTopic {
                id: topic.id.clone(),
            });
        }
    }

    for (alias, target) in &config.aliases {
        if !seen.contains(target.as_str()) {
            warnings.push(ConfigWarning::DanglingAlias {
                alias: alias.clone(),
                target: target.clone(),
            });
        }
    }

    let content_dir = &config.site.content_dir;
    if !content_dir.is_dir() {
        warnings.push(ConfigWarning::ContentDirMissing {
            path: content_dir.display().to_string(),
        });
        return warnings;
    }

    for topic in &config.topics {
        let path = config.topic_path(topic);
        if !path.is_file() {
            warnings.push(ConfigWarning::TopicFileMissing {
                id: topic.id.clone(),
                path: path.display().to_string(),
            });
        }
    }

    warnings
}
