use jiff::civil::Date;
use moviehub_store::model::{MovieInfo, NewMovieInfo};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::null_as_default;
use crate::validation::{self, Constrained, Constraint, Rule};

/// Movie info resource as exchanged over the wire.
///
/// The `id` is ignored on create and update; the store assigns and keeps it.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfoResource {
    /// Store-assigned identifier, `null` on create.
    #[serde(default)]
    pub id: Option<String>,
    /// Movie title.
    #[serde(default)]
    pub name: Option<String>,
    /// Release year, `0` when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    /// Cast member names.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<String>,
    /// Release date, `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<Date>,
}

impl MovieInfoResource {
    /// Converts the resource into insertable data, dropping the identifier.
    pub fn into_new_model(self) -> NewMovieInfo {
        NewMovieInfo {
            name: self.name.unwrap_or_default(),
            year: self.year,
            cast: self.cast,
            release_date: self.release_date,
        }
    }

    /// Builds the resource from a stored movie info.
    pub fn from_model(movie_info: MovieInfo) -> Self {
        Self {
            id: Some(movie_info.id),
            name: Some(movie_info.name),
            year: movie_info.year,
            cast: movie_info.cast,
            release_date: movie_info.release_date,
        }
    }
}

impl Constrained for MovieInfoResource {
    const SEPARATOR: &'static str = ",";

    fn constraints(&self) -> Vec<Constraint<'_>> {
        vec![
            Constraint::new("name", self.name.as_deref(), &[Rule::NotBlank]),
            Constraint::new("year", self.year, &[Rule::GreaterThanZero]),
            Constraint::new("cast", self.cast.as_slice(), &[Rule::NotBlankElements]),
        ]
    }
}

impl Validate for MovieInfoResource {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validation::evaluate(self)
    }
}

/// Query parameters for listing movie infos.
#[must_use]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfoFilter {
    /// Only return movie infos released in this year.
    pub year: Option<i32>,
}
