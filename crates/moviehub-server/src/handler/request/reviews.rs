use moviehub_store::model::{NewReview, Review};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::null_as_default;
use crate::validation::{self, Constrained, Constraint, Rule};

/// Review resource as exchanged over the wire.
///
/// The `id` is ignored on create and update; the store assigns and keeps it.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResource {
    /// Store-assigned identifier, `null` on create.
    #[serde(default)]
    pub id: Option<String>,
    /// Identifier of the reviewed movie info.
    #[serde(default)]
    pub movie_info_id: Option<String>,
    /// Free-form comment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    /// Rating, zero or greater.
    pub rating: f64,
}

impl ReviewResource {
    /// Converts the resource into insertable data, dropping the identifier.
    pub fn into_new_model(self) -> NewReview {
        NewReview {
            movie_info_id: self.movie_info_id.unwrap_or_default(),
            comment: self.comment,
            rating: self.rating,
        }
    }

    /// Builds the resource from a stored review.
    pub fn from_model(review: Review) -> Self {
        Self {
            id: Some(review.id),
            movie_info_id: Some(review.movie_info_id),
            comment: review.comment,
            rating: review.rating,
        }
    }
}

impl Constrained for ReviewResource {
    const SEPARATOR: &'static str = ", ";

    fn constraints(&self) -> Vec<Constraint<'_>> {
        vec![
            Constraint::new("movieInfoId", self.movie_info_id.as_deref(), &[Rule::NotBlank]),
            Constraint::new("rating", self.rating, &[Rule::NotNegative]),
        ]
    }
}

impl Validate for ReviewResource {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validation::evaluate(self)
    }
}

/// Query parameters for listing reviews.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    /// Only return reviews of this movie info.
    pub movie_info_id: Option<String>,
}
