//! Path parameter types for HTTP handlers.

use serde::{Deserialize, Serialize};

/// Path parameters for single movie info operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfoPathParams {
    /// Identifier of the movie info.
    pub id: String,
}

/// Path parameters for single review operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPathParams {
    /// Identifier of the review.
    pub id: String,
}
