//! Resolution of a parsed `RawConfig` into a `Config`.
//!
//! Applies defaults, resolves the content directory relative to the config file and fills in
//! per-topic defaults.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{
    Config, ConfigError, SearchSettings, SiteSettings, Topic,
    parse::{RawConfig, RawSearchSettings, RawTopic},
};

/// Resolves a raw configuration loaded from `config_path`.
pub fn resolve_config(raw: RawConfig, config_path: &Path) -> Result<Config, ConfigError> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));

    let mut site = SiteSettings::default();
    if let Some(raw_site) = raw.site {
        if let Some(dir) = raw_site.content_dir {
            site.content_dir = resolve_content_dir(&dir, config_dir)?;
        } else {
            site.content_dir = config_dir.join(&site.content_dir);
        }
        site.available = raw_site.available;
    } else {
        site.content_dir = config_dir.join(&site.content_dir);
    }

    let search = raw
        .search
        .map(|raw_search| apply_search(SearchSettings::default(), &raw_search))
        .unwrap_or_default();

    let topics = raw
        .topic
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, raw_topic)| resolve_topic(raw_topic, i + 1, config_path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Config {
        site,
        search,
        topics,
        aliases: raw.aliases.unwrap_or_default(),
        config_root: Some(config_dir.to_path_buf()),
    })
}

/// Overlays raw search values on top of `base`.
fn apply_search(mut base: SearchSettings, raw: &RawSearchSettings) -> SearchSettings {
    if let Some(v) = raw.limit {
        base.limit = v;
    }
    if let Some(v) = raw.max_snippets {
        base.max_snippets = v;
    }
    if let Some(v) = raw.snippet_window {
        base.snippet_window = v;
    }
    if let Some(v) = raw.debounce_ms {
        base.debounce_ms = v;
    }
    base
}

/// Trims the topic fields and defaults `file` to the id.
fn resolve_topic(raw: RawTopic, position: usize, config_path: &Path) -> Result<Topic, ConfigError> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        return Err(ConfigError::EmptyTopicId {
            path: config_path.to_path_buf(),
            position,
        });
    }

    let file = raw
        .file
        .map(|f| f.trim().trim_end_matches(".md").to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| id.clone());

    Ok(Topic {
        id,
        title: raw.title.trim().to_string(),
        file,
        group: raw.group.filter(|g| !g.trim().is_empty()),
    })
}

/// Resolves the content directory.
///
/// Handles three cases:
/// - Tilde paths (`~/notes`) - expanded to home directory
/// - Relative paths (`assets/data`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// The directory is not required to exist; `Config::validate` reports that.
pub fn resolve_content_dir(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    Ok(if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    })
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
