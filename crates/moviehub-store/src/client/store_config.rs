//! Document store configuration.

use std::fmt;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{StoreClient, StoreError, StoreResult, TRACING_TARGET_CLIENT};

/// Configuration for the in-process document store.
///
/// ## Example
///
/// ```rust
/// use moviehub_store::StoreConfig;
///
/// let client = StoreConfig::default()
///     .with_max_documents(1_000)
///     .build()?;
/// # Ok::<(), moviehub_store::StoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "store configurations must be used to create a store client"]
pub struct StoreConfig {
    /// Maximum number of documents held by a single collection
    #[cfg_attr(
        feature = "config",
        arg(
            long = "store-max-documents",
            env = "STORE_MAX_DOCUMENTS",
            default_value_t = DEFAULT_MAX_DOCUMENTS
        )
    )]
    pub store_max_documents: usize,
}

const DEFAULT_MAX_DOCUMENTS: usize = 100_000;

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_max_documents: DEFAULT_MAX_DOCUMENTS,
        }
    }
}

impl StoreConfig {
    /// Sets the maximum number of documents per collection.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_CLIENT)]
    pub fn with_max_documents(mut self, max_documents: usize) -> Self {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            max_documents,
            "Setting collection capacity"
        );
        self.store_max_documents = max_documents;
        self
    }

    /// Returns the per-collection capacity.
    #[inline]
    pub fn max_documents(&self) -> usize {
        self.store_max_documents
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.store_max_documents == 0 {
            return Err(StoreError::Config(
                "store_max_documents must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validates the configuration and creates a new client.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_CLIENT)]
    pub fn build(self) -> StoreResult<StoreClient> {
        self.validate()?;
        Ok(StoreClient::new(self))
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoreConfig(max_documents: {})", self.store_max_documents)
    }
}
