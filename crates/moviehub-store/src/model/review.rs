//! Review model.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::client::{Collection, Collections, Document};

/// A review of a movie as stored.
///
/// The movie info reference is not enforced; a review may point at a movie
/// info that does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Store-assigned identifier.
    pub id: String,
    /// Identifier of the reviewed movie info.
    pub movie_info_id: String,
    /// Free-form comment.
    pub comment: String,
    /// Rating, zero or greater.
    pub rating: f64,
}

/// Data for creating or replacing a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    /// Identifier of the reviewed movie info.
    pub movie_info_id: String,
    /// Free-form comment.
    pub comment: String,
    /// Rating, zero or greater.
    pub rating: f64,
}

impl Review {
    /// Combines an identifier with insertable data.
    pub fn from_new(id: impl Into<String>, new: NewReview) -> Self {
        Self {
            id: id.into(),
            movie_info_id: new.movie_info_id,
            comment: new.comment,
            rating: new.rating,
        }
    }
}

impl Document for Review {
    const COLLECTION: &'static str = "reviews";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(collections: &Collections) -> &RwLock<Collection<Self>> {
        &collections.reviews
    }
}
