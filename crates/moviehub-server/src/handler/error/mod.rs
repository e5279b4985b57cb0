//! [`Error`], [`ErrorKind`] and [`Result`].

mod http_error;
mod store_error;
mod validation_error;

pub use http_error::{Error, ErrorKind, Result};
