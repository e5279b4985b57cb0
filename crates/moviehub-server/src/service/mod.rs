//! Application state and dependency injection.

mod config;

use moviehub_store::StoreClient;

pub use crate::service::config::{ServiceConfig, ServiceKind};
pub use crate::{Error, Result};

/// Tracing target for service state operations.
const TRACING_TARGET: &str = "moviehub_server::service";

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    pub store: StoreClient,

    // Internal services:
    pub service: ServiceKind,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        let store = service_config.store.clone().build()?;

        tracing::info!(
            target: TRACING_TARGET,
            service = %service_config.service,
            max_documents = store.config().max_documents(),
            "Service state initialized"
        );

        Ok(Self::new(store, service_config.service))
    }

    /// Creates application state around an existing store.
    pub fn new(store: StoreClient, service: ServiceKind) -> Self {
        Self { store, service }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(store: StoreClient);

// Internal services:
impl_di!(service: ServiceKind);

#[cfg(test)]
mod tests {
    use axum::extract::FromRef;
    use moviehub_store::StoreConfig;

    use super::*;

    #[test]
    fn state_from_default_config() -> anyhow::Result<()> {
        let state = ServiceState::from_config(&ServiceConfig::default())?;
        assert_eq!(state.service, ServiceKind::MovieInfo);
        assert!(!StoreClient::from_ref(&state).is_closed());
        Ok(())
    }

    #[test]
    fn invalid_store_config_is_rejected() {
        let config = ServiceConfig {
            store: StoreConfig::default().with_max_documents(0),
            ..ServiceConfig::default()
        };

        let error = ServiceState::from_config(&config).unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::Config);
    }
}
