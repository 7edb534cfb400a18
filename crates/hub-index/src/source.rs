//! Where topic markdown comes from.

use std::{collections::HashMap, future::Future, io, path::PathBuf};

use tokio::fs;

use crate::SourceError;

/// Asynchronous access to topic markdown by file stem.
pub trait DocumentSource: Send + Sync + 'static {
    /// Fetches the markdown stored under `file`.
    fn fetch(&self, file: &str) -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// Reads `{root}/{file}.md` from disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Content directory.
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path that backs `file`.
    pub fn path_for(&self, file: &str) -> PathBuf {
        self.root.join(format!("{file}.md"))
    }
}

impl DocumentSource for DirectorySource {
    async fn fetch(&self, file: &str) -> Result<String, SourceError> {
        let path = self.path_for(file);
        match fs::read_to_string(&path).await {
            Ok(markdown) => Ok(markdown),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound(file.into())),
            Err(source) => Err(SourceError::Read { path, source }),
        }
    }
}

/// Serves documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// File stem -> markdown.
    documents: HashMap<String, String>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous one under the same name.
    #[must_use]
    pub fn with(mut self, file: impl Into<String>, markdown: impl Into<String>) -> Self {
        self.documents.insert(file.into(), markdown.into());
        self
    }
}

impl DocumentSource for MemorySource {
    async fn fetch(&self, file: &str) -> Result<String, SourceError> {
        self.documents
            .get(file)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(file.into()))
    }
}
