//! Builds a [`SearchIndex`] from the topic catalog.

use std::sync::Arc;

use hub_config::Topic;
use hub_document::Document;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{DocumentSource, IndexError, SearchIndex, SourceError, TopicCatalog};

/// Fetches every available topic concurrently and indexes its sections.
#[derive(Debug)]
pub struct IndexBuilder<S> {
    /// Topics to index.
    catalog: Arc<TopicCatalog>,
    /// Where the markdown comes from.
    source: Arc<S>,
}

impl<S> Clone for IndexBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            source: Arc::clone(&self.source),
        }
    }
}

/// Outcome of one fetch task: registry position, topic and fetched markdown.
type Fetched = (usize, Topic, Result<String, SourceError>);

impl<S: DocumentSource> IndexBuilder<S> {
    /// Creates a builder over `catalog` reading from `source`.
    pub fn new(catalog: Arc<TopicCatalog>, source: Arc<S>) -> Self {
        Self { catalog, source }
    }

    /// The catalog being indexed.
    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    /// Builds a fresh index.
    ///
    /// Topics whose file is not available are not fetched. A failed fetch is logged and the
    /// topic contributes no sections. Sections are inserted in registry order, then document
    /// order, whatever order the fetches complete in. The future resolves once every fetch has
    /// settled; only a failed task join aborts the build.
    pub async fn build(&self) -> Result<SearchIndex, IndexError> {
        let mut tasks: JoinSet<Fetched> = JoinSet::new();

        for (position, topic) in self.catalog.topics().iter().enumerate() {
            if !self.catalog.exists(&topic.id) {
                debug!(topic = %topic.id, "topic file not available; not indexing");
                continue;
            }
            let source = Arc::clone(&self.source);
            let topic = topic.clone();
            tasks.spawn(async move {
                let fetched = source.fetch(&topic.file).await;
                (position, topic, fetched)
            });
        }

        let mut documents = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let (position, topic, fetched) = joined.map_err(|e| IndexError::join(&e))?;
            match fetched {
                Ok(markdown) => {
                    documents.push((position, Document::new(topic.id, topic.title, markdown)));
                }
                Err(error) => warn!(topic = %topic.id, %error, "failed to load topic; skipping"),
            }
        }
        documents.sort_by_key(|(position, _)| *position);

        let index: SearchIndex = documents
            .iter()
            .flat_map(|(_, document)| document.sections())
            .collect();
        info!(
            sections = index.len(),
            topics = documents.len(),
            "search index built"
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, time::Duration};

    use tokio::time::sleep;

    use super::*;
    use crate::MemorySource;

    fn topic(id: &str, title: &str) -> Topic {
        Topic {
            id: id.into(),
            title: title.into(),
            file: id.into(),
            group: None,
        }
    }

    /// Source that answers later for earlier topics, to scramble completion order.
    struct ReversedDelaySource {
        /// Documents by name with the delay before answering.
        docs: BTreeMap<String, (u64, String)>,
    }

    impl DocumentSource for ReversedDelaySource {
        async fn fetch(&self, file: &str) -> Result<String, SourceError> {
            let (delay, markdown) = self
                .docs
                .get(file)
                .cloned()
                .ok_or_else(|| SourceError::NotFound(file.into()))?;
            sleep(Duration::from_millis(delay)).await;
            Ok(markdown)
        }
    }

    #[tokio::test]
    async fn test_skips_unavailable_and_failed_topics() {
        let catalog = TopicCatalog::new(
            vec![topic("a", "A"), topic("b", "B"), topic("c", "C")],
            BTreeMap::new(),
            ["a".to_string(), "b".to_string()],
        );
        // "b" is listed as available but the source cannot deliver it.
        let source = MemorySource::new().with("a", "# One\nx").with("c", "# Three\nz");
        let index = IndexBuilder::new(Arc::new(catalog), Arc::new(source))
            .build()
            .await
            .unwrap();

        let topics: Vec<_> = index.sections().map(|s| s.topic_id.as_str()).collect();
        assert_eq!(topics, vec!["a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_registry_order_independent_of_completion() {
        let catalog = TopicCatalog::new(
            vec![topic("first", "First"), topic("second", "Second")],
            BTreeMap::new(),
            ["first".to_string(), "second".to_string()],
        );
        let source = ReversedDelaySource {
            docs: BTreeMap::from([
                ("first".to_string(), (50, "# F1\na\n# F2\nb".to_string())),
                ("second".to_string(), (5, "# S1\nc".to_string())),
            ]),
        };
        let index = IndexBuilder::new(Arc::new(catalog), Arc::new(source))
            .build()
            .await
            .unwrap();

        let titles: Vec<_> = index.sections().map(|s| s.section_title.as_str()).collect();
        assert_eq!(titles, vec!["F1", "F2", "S1"]);
    }

    #[tokio::test]
    async fn test_empty_catalog_builds_empty_index() {
        let builder = IndexBuilder::new(Arc::new(TopicCatalog::default()), Arc::new(MemorySource::new()));
        assert!(builder.build().await.unwrap().is_empty());
    }
}
