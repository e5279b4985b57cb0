//! Document store client, configuration, and collection storage.

mod collection;
mod store_client;
mod store_config;

pub(crate) use collection::{Collection, Collections, Document};
pub use store_client::{StoreClient, StoreStatus};
pub use store_config::StoreConfig;
