//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use hub_config::{Config, Preferences, preferences_path};
use hub_document::Document;
use hub_index::{DirectorySource, SearchSession, TopicCatalog, TopicRef};
use tracing::warn;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config file was found).
    pub config: Config,
    /// Catalog built on first use.
    catalog: Option<Arc<TopicCatalog>>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            catalog: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init` and `prefs`, which must work even when an existing config is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            catalog: None,
        })
    }

    /// Ensures at least one topic is configured, optionally printing an init hint.
    pub fn require_topics(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.config.topics.is_empty() {
            eprintln!("error: no topics defined in configuration");
            if show_init_hint {
                eprintln!("Run 'hub init' to create a configuration file, then add [[topic]] entries.");
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the topic catalog, building it on first use.
    pub fn catalog(&mut self) -> Result<Arc<TopicCatalog>, ExitCode> {
        if let Some(catalog) = &self.catalog {
            return Ok(Arc::clone(catalog));
        }
        let catalog = TopicCatalog::from_config(&self.config).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        let catalog = Arc::new(catalog);
        self.catalog = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Creates a search session over the content directory and builds its index.
    pub async fn search_session(&mut self) -> Result<SearchSession<DirectorySource>, ExitCode> {
        self.require_topics(true)?;
        let catalog = self.catalog()?;
        let source = Arc::new(DirectorySource::new(&self.config.site.content_dir));
        let session = SearchSession::new(catalog, source, &self.config.search);

        if let Err(e) = session.rebuild().await {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
        Ok(session)
    }

    /// Loads the markdown behind a resolved topic reference.
    pub fn load_document(&self, reference: &TopicRef<'_>) -> Result<Document, ExitCode> {
        let path = self.config.topic_path(reference.topic);
        Document::load(&path, &reference.topic.id, &reference.topic.title).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Resolves a topic reference or prints a consistent error.
pub fn resolve_or_failure<'a>(
    catalog: &'a TopicCatalog,
    reference: &str,
) -> Result<TopicRef<'a>, ExitCode> {
    let Some(resolved) = catalog.resolve(reference) else {
        eprintln!("error: unknown topic: {reference}");
        return Err(ExitCode::FAILURE);
    };
    if !catalog.exists(&resolved.topic.id) {
        eprintln!("Content coming soon: '{}' has no content yet.", resolved.topic.title);
        return Err(ExitCode::FAILURE);
    }
    Ok(resolved)
}

/// Returns the preferences file location or prints a consistent error.
pub fn preferences_path_or_failure() -> Result<PathBuf, ExitCode> {
    preferences_path().ok_or_else(|| {
        eprintln!("error: could not determine a data directory for preferences");
        ExitCode::FAILURE
    })
}

/// Loads saved preferences, falling back to defaults with a warning when they are unreadable.
pub fn load_preferences() -> Preferences {
    let Some(path) = preferences_path() else {
        return Preferences::default();
    };
    Preferences::load(&path).unwrap_or_else(|error| {
        warn!(%error, "ignoring unreadable preferences");
        Preferences::default()
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
