//! Movie info model.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::client::{Collection, Collections, Document};

/// Movie metadata as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    /// Store-assigned identifier.
    pub id: String,
    /// Movie title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Cast member names.
    pub cast: Vec<String>,
    /// Release date, if known.
    pub release_date: Option<Date>,
}

/// Data for creating or replacing a movie info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovieInfo {
    /// Movie title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Cast member names.
    pub cast: Vec<String>,
    /// Release date, if known.
    pub release_date: Option<Date>,
}

impl MovieInfo {
    /// Combines an identifier with insertable data.
    pub fn from_new(id: impl Into<String>, new: NewMovieInfo) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            year: new.year,
            cast: new.cast,
            release_date: new.release_date,
        }
    }
}

impl Document for MovieInfo {
    const COLLECTION: &'static str = "movie_infos";

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(collections: &Collections) -> &RwLock<Collection<Self>> {
        &collections.movie_infos
    }
}
