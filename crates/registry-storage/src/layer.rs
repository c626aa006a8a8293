//! Layer descriptors

use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// A filesystem layer as referenced by an image manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FsLayer {
    #[serde(rename = "blobSum")]
    pub blob_sum: Digest,
}

impl FsLayer {
    pub fn new(blob_sum: Digest) -> Self {
        Self { blob_sum }
    }
}
