//! Document store error to HTTP error conversion.

use moviehub_store::StoreError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for store error conversions.
const TRACING_TARGET: &str = "moviehub_server::handler::store_error";

impl From<StoreError> for Error<'static> {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { collection, id } => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    collection,
                    id = %id,
                    "document not found"
                );
                ErrorKind::NotFound
                    .with_message(format!("Document not found for the given id {id}"))
                    .with_resource(collection)
            }
            StoreError::CapacityExceeded {
                collection,
                capacity,
            } => {
                tracing::error!(
                    target: TRACING_TARGET,
                    collection,
                    capacity,
                    "document store collection is full"
                );
                ErrorKind::InternalServerError
                    .with_context(format!("collection '{collection}' reached {capacity} documents"))
                    .with_resource(collection)
            }
            StoreError::Closed => {
                tracing::error!(target: TRACING_TARGET, "document store is closed");
                ErrorKind::InternalServerError.with_context("document store is closed")
            }
            StoreError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "document store configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = Error::from(StoreError::NotFound {
            collection: "reviews",
            id: "42".to_owned(),
        });

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Document not found for the given id 42"));
        assert_eq!(error.resource(), Some("reviews"));
    }

    #[test]
    fn store_failures_map_to_500() {
        let closed = Error::from(StoreError::Closed);
        assert_eq!(closed.kind(), ErrorKind::InternalServerError);

        let full = Error::from(StoreError::CapacityExceeded {
            collection: "movie_infos",
            capacity: 1,
        });
        assert_eq!(full.kind(), ErrorKind::InternalServerError);
        assert!(full.message().is_none());
    }
}
