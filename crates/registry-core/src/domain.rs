//! Backend error values
//!
//! These describe lower-level conditions (a missing repository, a stale
//! upload location) and are not part of the coded wire vocabulary. Handlers
//! decide how, or whether, to turn them into coded errors.

use registry_storage::Digest;
use thiserror::Error;

/// Operation against a repository that does not exist in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No repository found with Name: {name}")]
pub struct RepositoryNotFoundError {
    pub name: String,
}

/// Operation against an image manifest that does not exist in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No manifest found with Name: {name}, Tag: {tag}")]
pub struct ManifestNotFoundError {
    pub name: String,
    pub tag: String,
}

/// Operation against a layer that does not exist in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No blob found with Name: {name}, Digest: {digest}")]
pub struct BlobNotFoundError {
    pub name: String,
    pub digest: Digest,
}

/// Blob upload operation against an invalid upload location.
///
/// The location may belong to a cancelled, completed, or stale upload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No blob upload found at Location: {location}")]
pub struct BlobUploadNotFoundError {
    pub location: String,
}

/// Out-of-order blob chunk upload.
///
/// `last_valid_range` and `blob_size` tell the client where to resume.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Invalid range provided for upload at Location: {location}. Last Valid Range: {last_valid_range}, Blob Size: {blob_size}"
)]
pub struct BlobUploadInvalidRangeError {
    pub location: String,
    pub last_valid_range: i64,
    pub blob_size: i64,
}

/// Unexpected HTTP status returned by a registry API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Received unexpected HTTP status: {status}")]
pub struct UnexpectedHttpStatusError {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found() {
        let err = RepositoryNotFoundError {
            name: "library/busybox".to_string(),
        };
        assert_eq!(err.to_string(), "No repository found with Name: library/busybox");
    }

    #[test]
    fn test_manifest_not_found() {
        let err = ManifestNotFoundError {
            name: "library/busybox".to_string(),
            tag: "latest".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No manifest found with Name: library/busybox, Tag: latest"
        );
    }

    #[test]
    fn test_blob_not_found() {
        let err = BlobNotFoundError {
            name: "library/busybox".to_string(),
            digest: Digest::parse("sha256:abcd").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "No blob found with Name: library/busybox, Digest: sha256:abcd"
        );
    }

    #[test]
    fn test_blob_upload_not_found() {
        let err = BlobUploadNotFoundError {
            location: "/v2/x/blobs/uploads/1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No blob upload found at Location: /v2/x/blobs/uploads/1"
        );
    }

    #[test]
    fn test_blob_upload_invalid_range() {
        let err = BlobUploadInvalidRangeError {
            location: "/v2/x/blobs/uploads/1".to_string(),
            last_valid_range: 99,
            blob_size: 500,
        };
        assert_eq!(
            err.to_string(),
            "Invalid range provided for upload at Location: /v2/x/blobs/uploads/1. \
             Last Valid Range: 99, Blob Size: 500"
        );
    }

    #[test]
    fn test_unexpected_http_status() {
        let err = UnexpectedHttpStatusError {
            status: "502 Bad Gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Received unexpected HTTP status: 502 Bad Gateway"
        );
    }
}
