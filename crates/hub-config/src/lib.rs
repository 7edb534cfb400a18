//! Configuration system for the learning hub.
//!
//! The hub reads a `.hub.toml` file, found by walking up the directory tree from the current
//! working directory. It declares where topic markdown lives, the ordered topic registry shown
//! in the sidebar, topic aliases and search tuning. Per-user preferences (theme, font size) are
//! persisted separately under the platform data directory.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod preferences;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

pub use discovery::{CONFIG_FILENAME, PREFERENCES_FILENAME, discover_config_file, preferences_path};
pub use error::ConfigError;
pub use parse::{
    RawConfig, RawSearchSettings, RawSiteSettings, RawTopic, parse_config_file, parse_config_str,
};
pub use preferences::{FontSize, Preferences, Theme};
pub use resolve::{resolve_config, resolve_content_dir};
use serde::{Deserialize, Serialize};
pub use templates::config_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Fully resolved hub configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Site layout settings.
    pub site: SiteSettings,
    /// Search tuning.
    pub search: SearchSettings,
    /// Topic registry in sidebar order.
    pub topics: Vec<Topic>,
    /// Alias -> topic id.
    pub aliases: BTreeMap<String, String>,
    /// Directory containing the config file, if one was found.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration governing `cwd`.
    ///
    /// Returns `Ok(Config::default())` if no `.hub.toml` is found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        resolve_config(raw, path)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the markdown path backing a topic.
    pub fn topic_path(&self, topic: &Topic) -> PathBuf {
        self.site.content_dir.join(format!("{}.md", topic.file))
    }

    /// Serializes the effective site and search settings to TOML.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            site: SerializableSite {
                content_dir: self.site.content_dir.display().to_string(),
                available: self.site.available.clone(),
            },
            search: self.search.clone(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Where topic content lives.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Directory holding `<file>.md` topic sources.
    pub content_dir: PathBuf,
    /// Explicit allow-list of file stems; `None` means "whatever exists on disk".
    pub available: Option<Vec<String>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("assets/data"),
            available: None,
        }
    }
}

/// Search tuning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum results returned per query.
    pub limit: usize,
    /// Maximum snippets kept per result.
    pub max_snippets: usize,
    /// Snippet window length in characters.
    pub snippet_window: usize,
    /// Quiescence delay in milliseconds before an interactive search runs.
    pub debounce_ms: u64,
}

impl SearchSettings {
    /// Returns the debounce delay as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: 10,
            max_snippets: 2,
            snippet_window: 150,
            debounce_ms: 300,
        }
    }
}

/// A registry entry: one sidebar topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Topic identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Markdown file stem under the content directory.
    pub file: String,
    /// Sidebar group label.
    pub group: Option<String>,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Site settings.
    site: SerializableSite,
    /// Search settings.
    search: SearchSettings,
}

/// Site settings with the path rendered as a string.
#[derive(Serialize)]
struct SerializableSite {
    /// Resolved content directory.
    content_dir: String,
    /// Allow-list, omitted when derived from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<Vec<String>>,
}
