//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use moviehub_server::handler::routes;
//! use moviehub_server::service::{ServiceConfig, ServiceKind, ServiceState};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::default().with_service(ServiceKind::MovieInfo);
//! let state = ServiceState::from_config(&config)?;
//!
//! let router: axum::Router = routes(config.service).with_state(state);
//! # let _ = router;
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod monitors;
mod movie_infos;
pub mod request;
pub mod response;
mod reviews;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::{ServiceKind, ServiceState};

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with the resource routes of the selected service,
/// the health route and a not-found fallback.
pub fn routes(service: ServiceKind) -> Router<ServiceState> {
    let resource_router = match service {
        ServiceKind::MovieInfo => movie_infos::routes(),
        ServiceKind::MovieReview => reviews::routes(),
    };

    Router::new()
        .merge(resource_router)
        .merge(monitors::routes())
        .fallback(handler)
}

#[cfg(test)]
mod test {
    use axum::Router;
    use axum_test::TestServer;
    use moviehub_store::StoreClient;

    use crate::handler::routes;
    use crate::service::{ServiceConfig, ServiceKind, ServiceState};

    /// Returns a new [`TestServer`] with the given router and state.
    pub fn create_test_server_with_state(
        router: Router<ServiceState>,
        state: ServiceState,
    ) -> anyhow::Result<TestServer> {
        let app = router.with_state(state);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] for the given service and a handle to its store.
    pub fn create_test_server_for(
        service: ServiceKind,
    ) -> anyhow::Result<(TestServer, StoreClient)> {
        let config = ServiceConfig::default().with_service(service);
        let state = ServiceState::from_config(&config)?;
        let store = state.store.clone();
        let router = routes(service);
        Ok((create_test_server_with_state(router, state)?, store))
    }

    /// Returns a new [`TestServer`] with the default router and state.
    pub fn create_test_server() -> anyhow::Result<TestServer> {
        let (server, _) = create_test_server_for(ServiceKind::default())?;
        Ok(server)
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server()?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/v2/unknown").await;
        response.assert_status_not_found();
        Ok(())
    }

    #[tokio::test]
    async fn other_service_routes_are_not_mounted() -> anyhow::Result<()> {
        let (server, _) = create_test_server_for(ServiceKind::MovieInfo)?;
        server.get("/v1/reviews").await.assert_status_not_found();

        let (server, _) = create_test_server_for(ServiceKind::MovieReview)?;
        server.get("/v1/movieinfos").await.assert_status_not_found();
        Ok(())
    }
}
