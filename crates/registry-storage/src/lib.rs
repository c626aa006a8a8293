//! Registry Storage Values
//!
//! This crate provides the storage-layer values that the registry error
//! vocabulary refers to: content digests and layer descriptors.

pub mod digest;
pub mod error;
pub mod layer;

pub use digest::{parse_digest, Digest};
pub use error::StorageError;
pub use layer::FsLayer;
