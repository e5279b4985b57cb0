//! Monitor response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::service::ServiceKind;

/// Health of the running service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is operating normally.
    #[default]
    Healthy,
    /// The document store no longer accepts operations.
    Unhealthy,
}

/// System monitoring status response.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    /// Overall service health.
    pub status: ServiceStatus,
    /// Which service this process runs.
    pub service: ServiceKind,
    /// Number of documents the service currently stores.
    pub documents: usize,
    /// Timestamp when this status was generated.
    pub checked_at: Timestamp,
    /// Application version.
    pub version: String,
}
