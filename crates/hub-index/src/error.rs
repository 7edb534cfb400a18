//! Error types for the hub-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;
use tokio::task::JoinError;

/// Errors produced while fetching a single document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source has no document under this name.
    #[error("document not found: {0}")]
    NotFound(String),
}

/// Errors that abort an index build as a whole.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A fetch task could not be joined.
    #[error("index build failed: {message}")]
    Build {
        /// Description of the failure.
        message: String,
    },

    /// Failed to list the content directory.
    #[error("failed to scan content directory {path}: {message}")]
    Scan {
        /// Directory being scanned.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl IndexError {
    /// Creates a `Build` error from a task join failure.
    pub(crate) fn join(source: &JoinError) -> Self {
        Self::Build {
            message: source.to_string(),
        }
    }
}
