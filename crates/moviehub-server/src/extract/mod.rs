//! Enhanced HTTP request extractors with improved error handling and validation.
//!
//! All extractors are drop-in replacements for their axum counterparts whose
//! rejection is a [`handler::Error`], so a malformed request produces the same
//! plain-text `400 Bad Request` as any other client error.
//!
//! - [`Json`] - JSON deserialization with descriptive decoding errors
//! - [`ValidateJson`] - JSON extraction followed by rule-table validation
//! - [`Path`] - path parameter extraction
//! - [`Query`] - query parameter extraction
//!
//! [`handler::Error`]: crate::handler::Error

pub mod reject;

pub use crate::extract::reject::{Json, Path, Query, ValidateJson};
