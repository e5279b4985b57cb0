//! Document models for all entities in the store.
//!
//! Each entity has a stored form carrying the store-assigned identifier and an
//! insertable form carrying every other field.

mod movie_info;
mod review;

pub use movie_info::{MovieInfo, NewMovieInfo};
pub use review::{NewReview, Review};
