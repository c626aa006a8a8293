//! Storage error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
}
