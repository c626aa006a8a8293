//! Registry error codes
//!
//! Codes travel on the wire as their canonical string. The discriminant
//! values may change between releases and are never serialized.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Error category reported to registry clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    /// Catch-all for errors not defined below
    #[default]
    Unknown,

    // Layer upload errors
    /// The provided digest does not match the layer contents
    InvalidDigest,
    /// The provided length does not match the content length
    InvalidLength,

    /// The name in the manifest does not match the provided name
    InvalidName,
    /// The tag in the manifest does not match the provided tag
    InvalidTag,
    /// The repository name is not known
    UnknownRepository,
    /// The manifest name and tag are unknown
    UnknownManifest,
    /// The manifest is invalid, typically during a PUT
    InvalidManifest,
    /// The manifest fails signature validation
    UnverifiedManifest,
    /// The manifest references a nonexistent layer
    UnknownLayer,
    /// An unknown upload is accessed
    UnknownLayerUpload,
    /// The manifest is signed by an untrusted source
    UntrustedSignature,
}

/// Reverse lookup, built once from [`ErrorCode::as_str`]
static STRING_TO_ERROR_CODE: LazyLock<HashMap<&'static str, ErrorCode>> = LazyLock::new(|| {
    ErrorCode::ALL
        .iter()
        .map(|code| (code.as_str(), *code))
        .collect()
});

impl ErrorCode {
    /// Every defined code, in declaration order
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::Unknown,
        ErrorCode::InvalidDigest,
        ErrorCode::InvalidLength,
        ErrorCode::InvalidName,
        ErrorCode::InvalidTag,
        ErrorCode::UnknownRepository,
        ErrorCode::UnknownManifest,
        ErrorCode::InvalidManifest,
        ErrorCode::UnverifiedManifest,
        ErrorCode::UnknownLayer,
        ErrorCode::UnknownLayerUpload,
        ErrorCode::UntrustedSignature,
    ];

    /// Parse a canonical code string, returning [`ErrorCode::Unknown`] if
    /// the string is not recognized.
    pub fn parse(s: &str) -> Self {
        STRING_TO_ERROR_CODE
            .get(s)
            .copied()
            .unwrap_or(ErrorCode::Unknown)
    }

    /// Canonical identifier for this error code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::InvalidDigest => "INVALID_DIGEST",
            ErrorCode::InvalidLength => "INVALID_LENGTH",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidTag => "INVALID_TAG",
            ErrorCode::UnknownRepository => "UNKNOWN_REPOSITORY",
            ErrorCode::UnknownManifest => "UNKNOWN_MANIFEST",
            ErrorCode::InvalidManifest => "INVALID_MANIFEST",
            ErrorCode::UnverifiedManifest => "UNVERIFIED_MANIFEST",
            ErrorCode::UnknownLayer => "UNKNOWN_LAYER",
            ErrorCode::UnknownLayerUpload => "UNKNOWN_LAYER_UPLOAD",
            ErrorCode::UntrustedSignature => "UNTRUSTED_SIGNATURE",
        }
    }

    /// Human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "unknown error",
            ErrorCode::InvalidDigest => "provided digest did not match uploaded content",
            ErrorCode::InvalidLength => "provided length did not match content length",
            ErrorCode::InvalidName => "manifest name did not match URI",
            ErrorCode::InvalidTag => "manifest tag did not match URI",
            ErrorCode::UnknownRepository => "repository not known to registry",
            ErrorCode::UnknownManifest => "manifest not known",
            ErrorCode::InvalidManifest => "manifest is invalid",
            ErrorCode::UnverifiedManifest => "manifest failed signature validation",
            ErrorCode::UnknownLayer => "referenced layer not available",
            ErrorCode::UnknownLayerUpload => "cannot resume unknown layer upload",
            ErrorCode::UntrustedSignature => "manifest signed by untrusted source",
        }
    }

    /// Lowercased, space-separated form used in log lines
    /// (`INVALID_DIGEST` becomes `invalid digest`)
    pub fn title(&self) -> String {
        self.as_str().replace('_', " ").to_lowercase()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ErrorCode::parse(s))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ErrorCodeVisitor)
    }
}

struct ErrorCodeVisitor;

impl Visitor<'_> for ErrorCodeVisitor {
    type Value = ErrorCode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error code string or null")
    }

    // A null code keeps the default
    fn visit_unit<E: de::Error>(self) -> Result<ErrorCode, E> {
        Ok(ErrorCode::Unknown)
    }

    fn visit_none<E: de::Error>(self) -> Result<ErrorCode, E> {
        Ok(ErrorCode::Unknown)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ErrorCode, E> {
        Ok(ErrorCode::parse(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ErrorCode, E> {
        Ok(std::str::from_utf8(v)
            .map(ErrorCode::parse)
            .unwrap_or(ErrorCode::Unknown))
    }
}
