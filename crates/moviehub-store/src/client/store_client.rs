use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use uuid::Uuid;

use super::{Collections, Document};
use crate::{StoreConfig, StoreError, StoreResult, TRACING_TARGET_CLIENT, TRACING_TARGET_QUERY};

/// Document counts and availability of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// Whether the store still accepts operations.
    pub open: bool,
    /// Number of stored movie info documents.
    pub movie_infos: usize,
    /// Number of stored review documents.
    pub reviews: usize,
    /// Configured per-collection capacity.
    pub max_documents: usize,
}

/// Asynchronous in-process document store.
///
/// Cloning is cheap; all clones share the same collections. Entity access goes
/// through the repository traits in [`crate::query`].
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

struct StoreClientInner {
    config: StoreConfig,
    collections: Collections,
    closed: AtomicBool,
}

impl StoreClient {
    /// Creates a new, empty store.
    #[tracing::instrument(skip(config), target = TRACING_TARGET_CLIENT)]
    pub fn new(config: StoreConfig) -> Self {
        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            max_documents = config.store_max_documents,
            "Initializing document store"
        );

        Self {
            inner: Arc::new(StoreClientInner {
                config,
                collections: Collections::default(),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Returns the store configuration.
    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Closes the store; every later operation fails with [`StoreError::Closed`].
    pub fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::AcqRel) {
            tracing::info!(target: TRACING_TARGET_CLIENT, "Document store closed");
        }
    }

    /// Returns whether [`close`](Self::close) has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Returns document counts and availability.
    pub async fn status(&self) -> StoreStatus {
        let collections = &self.inner.collections;
        StoreStatus {
            open: !self.is_closed(),
            movie_infos: collections.movie_infos.read().await.len(),
            reviews: collections.reviews.read().await.len(),
            max_documents: self.inner.config.store_max_documents,
        }
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.is_closed() {
            tracing::error!(target: TRACING_TARGET_QUERY, "Operation attempted on a closed store");
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    /// Assigns a fresh identifier and stores the document built from it.
    pub(crate) async fn insert_with<T, F>(&self, build: F) -> StoreResult<T>
    where
        T: Document,
        F: FnOnce(String) -> T,
    {
        self.ensure_open()?;

        let capacity = self.inner.config.store_max_documents;
        let mut collection = T::collection(&self.inner.collections).write().await;
        if collection.len() >= capacity {
            tracing::warn!(
                target: TRACING_TARGET_QUERY,
                collection = T::COLLECTION,
                capacity,
                "Collection is full"
            );
            return Err(StoreError::CapacityExceeded {
                collection: T::COLLECTION,
                capacity,
            });
        }

        let mut id = Uuid::now_v7().to_string();
        while collection.contains(&id) {
            id = Uuid::now_v7().to_string();
        }

        let document = build(id);
        collection.insert(document.clone());

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            collection = T::COLLECTION,
            id = document.id(),
            "Document inserted"
        );

        Ok(document)
    }

    pub(crate) async fn find<T: Document>(&self, id: &str) -> StoreResult<Option<T>> {
        self.ensure_open()?;
        let collection = T::collection(&self.inner.collections).read().await;
        Ok(collection.get(id).cloned())
    }

    /// Returns matching documents in insertion order.
    pub(crate) async fn find_all<T, P>(&self, predicate: P) -> StoreResult<Vec<T>>
    where
        T: Document,
        P: Fn(&T) -> bool,
    {
        self.ensure_open()?;
        let collection = T::collection(&self.inner.collections).read().await;
        Ok(collection.iter().filter(|doc| predicate(doc)).cloned().collect())
    }

    pub(crate) async fn replace<T: Document>(&self, document: T) -> StoreResult<T> {
        self.ensure_open()?;
        let mut collection = T::collection(&self.inner.collections).write().await;
        if !collection.replace(document.clone()) {
            return Err(StoreError::NotFound {
                collection: T::COLLECTION,
                id: document.id().to_owned(),
            });
        }

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            collection = T::COLLECTION,
            id = document.id(),
            "Document replaced"
        );

        Ok(document)
    }

    pub(crate) async fn remove<T: Document>(&self, id: &str) -> StoreResult<T> {
        self.ensure_open()?;
        let mut collection = T::collection(&self.inner.collections).write().await;
        let removed = collection.remove(id).ok_or_else(|| StoreError::NotFound {
            collection: T::COLLECTION,
            id: id.to_owned(),
        })?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            collection = T::COLLECTION,
            id,
            "Document removed"
        );

        Ok(removed)
    }
}

impl fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreClient")
            .field("config", &self.inner.config)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
