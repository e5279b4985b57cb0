//! Service health monitoring handler.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use jiff::Timestamp;
use moviehub_store::StoreClient;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{MonitorStatus, ServiceStatus};
use crate::service::{ServiceKind, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "moviehub_server::handler::monitors";

/// Reports whether the document store still accepts operations.
///
/// Responds with `503 Service Unavailable` once the store has been closed.
#[tracing::instrument(skip_all, fields(service = %service))]
async fn health_status(
    State(store): State<StoreClient>,
    State(service): State<ServiceKind>,
) -> Result<(StatusCode, Json<MonitorStatus>)> {
    tracing::debug!(target: TRACING_TARGET, "Health status check requested");

    let store_status = store.status().await;
    let documents = match service {
        ServiceKind::MovieInfo => store_status.movie_infos,
        ServiceKind::MovieReview => store_status.reviews,
    };

    let (status, status_code) = if store_status.open {
        (ServiceStatus::Healthy, StatusCode::OK)
    } else {
        (ServiceStatus::Unhealthy, StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = MonitorStatus {
        status,
        service,
        documents,
        checked_at: Timestamp::now(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    };

    tracing::info!(
        target: TRACING_TARGET,
        status = ?status,
        documents,
        status_code = status_code.as_u16(),
        "Health status response prepared"
    );

    Ok((status_code, Json(response)))
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}
