//! Request types for HTTP handlers.
//!
//! The movie info and review resources double as response bodies: a resource
//! is validated and mapped into a model on the way in, and rebuilt from the
//! stored model on the way out.

use serde::{Deserialize, Deserializer};

mod movie_infos;
mod paths;
mod reviews;

pub use movie_infos::*;
pub use paths::*;
pub use reviews::*;

/// Deserializes `null` as the type's default value.
///
/// Together with `#[serde(default)]`, a missing or `null` field reaches
/// validation instead of failing to decode.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
