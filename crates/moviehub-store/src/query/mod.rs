//! Repository traits for entity access.
//!
//! Every trait is implemented for [`StoreClient`](crate::StoreClient), so a
//! single shared client serves all entities.

mod movie_info;
mod review;

pub use movie_info::MovieInfoRepository;
pub use review::ReviewRepository;
