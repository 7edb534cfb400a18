//! Topic catalog and in-memory full-text search for the learning hub.
//!
//! The index is small and short-lived: every available topic is fetched, split into sections
//! and held in memory. It is rebuilt wholesale and never updated in place.
//!
//! # Example
//!
//! ```no_run
//! use std::{collections::BTreeMap, sync::Arc};
//!
//! use hub_config::{SearchSettings, Topic};
//! use hub_index::{MemorySource, SearchSession, TopicCatalog};
//!
//! # async fn run() -> Result<(), hub_index::IndexError> {
//! let topic = Topic {
//!     id: "api-testing".into(),
//!     title: "API Testing Fundamentals".into(),
//!     file: "api-testing".into(),
//!     group: None,
//! };
//! let catalog = TopicCatalog::new(vec![topic], BTreeMap::new(), ["api-testing".to_string()]);
//! let source = MemorySource::new().with("api-testing", "# Token Handling\nSend a bearer token.");
//!
//! let session = SearchSession::new(Arc::new(catalog), Arc::new(source), &SearchSettings::default());
//! session.rebuild().await?;
//! for result in session.search("token") {
//!     println!("{} ({})", result.section_title, result.relevance_score);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod catalog;
mod error;
mod index;
mod search;
mod session;
mod snippet;
mod source;

pub use builder::IndexBuilder;
pub use catalog::{
    NAV_TITLE_MAX, TopicCatalog, TopicGroup, TopicRef, group_topics, truncate_title,
};
pub use error::{IndexError, SourceError};
pub use index::{IndexedSection, SearchIndex, SectionKey};
pub use search::{
    CONTENT_WEIGHT, SearchParams, SearchResult, Snippet, SnippetKind, TITLE_WEIGHT, TOPIC_WEIGHT,
    normalize_query, search,
};
pub use session::{Debouncer, SearchOutcome, SearchSession};
pub use snippet::{
    MARK_CLOSE, MARK_OPEN, extract_snippet, highlight, highlight_once, highlight_with,
};
pub use source::{DirectorySource, DocumentSource, MemorySource};
