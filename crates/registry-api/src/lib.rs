//! Registry API Error Responses
//!
//! This crate turns an error envelope into an Axum response. Choosing the
//! status code stays with the handler.

pub mod error;

pub use error::ErrorResponse;
