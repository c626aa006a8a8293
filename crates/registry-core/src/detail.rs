//! Detail payloads attached to coded errors

use registry_storage::FsLayer;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errcode::ErrorCode;
use crate::error::Error;

/// Detail for [`ErrorCode::UnknownLayer`], returned by manifest push for
/// layers that have not been transferred yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailUnknownLayer {
    /// Descriptor of the missing layer
    pub unknown: FsLayer,
}

impl From<DetailUnknownLayer> for Value {
    fn from(detail: DetailUnknownLayer) -> Self {
        json!({ "unknown": detail.unknown })
    }
}

impl Error {
    /// `UNKNOWN_LAYER` error carrying the missing layer's descriptor
    pub fn unknown_layer(layer: FsLayer) -> Self {
        Error::new(ErrorCode::UnknownLayer).with_detail(DetailUnknownLayer { unknown: layer })
    }
}
