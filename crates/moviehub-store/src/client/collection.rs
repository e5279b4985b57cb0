//! Insertion-ordered document collections.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::model::{MovieInfo, Review};

/// A document that can be stored in a [`Collection`].
pub(crate) trait Document: Clone + Send + Sync + 'static {
    /// Name of the collection holding documents of this type.
    const COLLECTION: &'static str;

    /// Returns the store-assigned identifier.
    fn id(&self) -> &str;

    /// Selects the collection for this document type.
    fn collection(collections: &Collections) -> &RwLock<Collection<Self>>;
}

/// All collections owned by a single store.
#[derive(Default)]
pub(crate) struct Collections {
    pub movie_infos: RwLock<Collection<MovieInfo>>,
    pub reviews: RwLock<Collection<Review>>,
}

/// Documents keyed by id, iterated in insertion order.
pub(crate) struct Collection<T> {
    documents: IndexMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }
}

impl<T: Document> Collection<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.documents.get(id)
    }

    /// Appends a new document. The caller guarantees the id is unused.
    pub fn insert(&mut self, document: T) {
        self.documents.insert(document.id().to_owned(), document);
    }

    /// Replaces an existing document in place, keeping its position.
    ///
    /// Returns `false` if no document with the same id exists.
    pub fn replace(&mut self, document: T) -> bool {
        match self.documents.get_mut(document.id()) {
            Some(slot) => {
                *slot = document;
                true
            }
            None => false,
        }
    }

    /// Removes a document, shifting later documents down to keep their order.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.documents.shift_remove(id)
    }

    /// Iterates documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.documents.values()
    }
}
