//! Configuration file parsing.
//!
//! Parses a `.hub.toml` file into an intermediate `RawConfig` whose fields are all optional,
//! before defaults are applied and paths are resolved.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Site layout section.
    pub site: Option<RawSiteSettings>,
    /// Search tuning section.
    pub search: Option<RawSearchSettings>,
    /// Alias -> topic id mapping.
    pub aliases: Option<BTreeMap<String, String>>,
    /// Ordered topic registry (`[[topic]]` tables).
    pub topic: Option<Vec<RawTopic>>,
}

/// Raw site settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteSettings {
    /// Directory holding the markdown topic files.
    pub content_dir: Option<String>,
    /// Explicit allow-list of file stems that have backing content.
    pub available: Option<Vec<String>>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum results returned per query.
    pub limit: Option<usize>,
    /// Maximum snippets kept per result.
    pub max_snippets: Option<usize>,
    /// Snippet window length in characters.
    pub snippet_window: Option<usize>,
    /// Quiescence delay before an interactive search runs.
    pub debounce_ms: Option<u64>,
}

/// Raw topic definition from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTopic {
    /// Topic identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Markdown file stem (defaults to the id).
    pub file: Option<String>,
    /// Sidebar group label.
    pub group: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}
