#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for client-related operations.
///
/// Use this target for logging client initialization, configuration, and lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "moviehub_store::client";

/// Tracing target for document query operations.
///
/// Use this target for logging reads, writes, and query-related errors.
pub const TRACING_TARGET_QUERY: &str = "moviehub_store::queries";

mod client;
pub mod model;
pub mod query;

pub use crate::client::{StoreClient, StoreConfig, StoreStatus};

/// Error type for all document store operations.
///
/// Absence of a document on lookup is not an error (lookups return `Option`);
/// [`StoreError::NotFound`] is only raised by operations that require the
/// document to exist, such as replace and delete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[must_use = "store errors should be handled appropriately"]
pub enum StoreError {
    /// The document addressed by an update or delete does not exist.
    #[error("Document '{id}' not found in collection '{collection}'")]
    NotFound {
        /// Name of the collection that was searched.
        collection: &'static str,
        /// Identifier that was looked up.
        id: String,
    },

    /// The collection already holds the configured maximum number of documents.
    #[error("Collection '{collection}' reached its capacity of {capacity} documents")]
    CapacityExceeded {
        /// Name of the full collection.
        collection: &'static str,
        /// Configured per-collection capacity.
        capacity: usize,
    },

    /// The store was closed and no longer accepts operations.
    #[error("Document store is closed")]
    Closed,

    /// The store configuration is invalid.
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns whether this error reports a missing document.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Specialized [`Result`] type for document store operations.
pub type StoreResult<T, E = StoreError> = Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_collection_and_id() {
        let error = StoreError::NotFound {
            collection: "reviews",
            id: "42".to_owned(),
        };

        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Document '42' not found in collection 'reviews'"
        );
    }

    #[test]
    fn only_missing_documents_are_not_found() {
        assert!(!StoreError::Closed.is_not_found());
        assert!(!StoreError::Config("store_max_documents".to_owned()).is_not_found());
    }
}
