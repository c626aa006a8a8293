//! Registry Error Vocabulary
//!
//! This crate provides the error codes, coded errors and error envelope
//! returned by the registry API, along with the backend error values that
//! handlers translate into them.

pub mod detail;
pub mod domain;
pub mod errcode;
pub mod error;

pub use detail::DetailUnknownLayer;
pub use domain::{
    BlobNotFoundError, BlobUploadInvalidRangeError, BlobUploadNotFoundError,
    ManifestNotFoundError, RepositoryNotFoundError, UnexpectedHttpStatusError,
};
pub use errcode::ErrorCode;
pub use error::{BoxError, Error, Errors};
