//! Owned search state: the current index snapshot and debounced interactive search.

use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError, RwLock},
    time::Duration,
};

use hub_config::SearchSettings;
use tokio::{sync::watch, task::JoinHandle, time::sleep};
use tracing::{debug, error};

use crate::{
    DocumentSource, IndexBuilder, IndexError, SearchIndex, SearchParams, SearchResult,
    TopicCatalog, search,
};

/// What an interactive search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The input was empty; show the topic list instead of results.
    Cleared,
    /// Results for a non-empty query.
    Results {
        /// The query as typed.
        query: String,
        /// Ranked results.
        results: Vec<SearchResult>,
    },
}

/// Runs only the most recently scheduled task, once `delay` passes without a newer one.
#[derive(Debug)]
pub struct Debouncer {
    /// Quiescence window.
    delay: Duration,
    /// The single pending task, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedules `task`, aborting any task still waiting.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            task.await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Aborts the pending task, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Shared slot holding the current index snapshot.
type IndexSlot = Arc<RwLock<Arc<SearchIndex>>>;

/// Reads the current snapshot out of a slot.
fn snapshot(slot: &IndexSlot) -> Arc<SearchIndex> {
    Arc::clone(&slot.read().unwrap_or_else(PoisonError::into_inner))
}

/// Replaces the snapshot in a slot.
fn store(slot: &IndexSlot, index: SearchIndex) {
    *slot.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(index);
}

/// The index owned by one consumer, plus debounced search over it.
///
/// The index starts empty. Rebuilds swap in a whole new index; searches read whichever
/// snapshot is current when they run.
#[derive(Debug)]
pub struct SearchSession<S> {
    /// Builds replacement indexes.
    builder: IndexBuilder<S>,
    /// Current snapshot.
    index: IndexSlot,
    /// Search parameters.
    params: SearchParams,
    /// Interactive input debouncer.
    debouncer: Debouncer,
    /// Publishes interactive outcomes.
    outcomes: Arc<watch::Sender<SearchOutcome>>,
}

impl<S: DocumentSource> SearchSession<S> {
    /// Creates a session with an empty index.
    pub fn new(catalog: Arc<TopicCatalog>, source: Arc<S>, settings: &SearchSettings) -> Self {
        let (outcomes, _) = watch::channel(SearchOutcome::Cleared);
        Self {
            builder: IndexBuilder::new(catalog, source),
            index: Arc::new(RwLock::new(Arc::new(SearchIndex::new()))),
            params: SearchParams::from(settings),
            debouncer: Debouncer::new(settings.debounce()),
            outcomes: Arc::new(outcomes),
        }
    }

    /// The catalog this session indexes.
    pub fn catalog(&self) -> &TopicCatalog {
        self.builder.catalog()
    }

    /// The current index snapshot.
    pub fn index(&self) -> Arc<SearchIndex> {
        snapshot(&self.index)
    }

    /// Rebuilds the index and swaps it in, returning the new section count.
    ///
    /// On failure the previous index stays in place.
    pub async fn rebuild(&self) -> Result<usize, IndexError> {
        let index = self.builder.build().await?;
        let count = index.len();
        store(&self.index, index);
        Ok(count)
    }

    /// Rebuilds in the background. Failures are logged.
    pub fn spawn_rebuild(&self) -> JoinHandle<()> {
        let builder = self.builder.clone();
        let slot = Arc::clone(&self.index);
        tokio::spawn(async move {
            match builder.build().await {
                Ok(index) => store(&slot, index),
                Err(error) => error!(%error, "search index rebuild failed"),
            }
        })
    }

    /// Searches the current snapshot immediately.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search(&self.index(), query, &self.params)
    }

    /// Subscribes to outcomes of debounced input.
    pub fn subscribe(&self) -> watch::Receiver<SearchOutcome> {
        self.outcomes.subscribe()
    }

    /// Records an input event. The search runs once input has been quiet for the debounce
    /// window, and its outcome is published to subscribers.
    pub fn input(&self, query: &str) {
        let query = query.to_string();
        let slot = Arc::clone(&self.index);
        let params = self.params.clone();
        let outcomes = Arc::clone(&self.outcomes);

        debug!(query = %query, "search scheduled");
        self.debouncer.schedule(async move {
            let outcome = if query.trim().is_empty() {
                SearchOutcome::Cleared
            } else {
                let results = search(&snapshot(&slot), &query, &params);
                SearchOutcome::Results { query, results }
            };
            outcomes.send_replace(outcome);
        });
    }
}
