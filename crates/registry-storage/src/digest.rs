//! Content digests

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// A content digest of the form `<algorithm>:<encoded>`
///
/// Only the shape is checked on parse. Digests are carried through error
/// messages and details verbatim, so an unusual algorithm or a short encoded
/// part is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest {
    string: String,
}

impl Digest {
    /// Parse a digest string (e.g., "sha256:abc123...")
    pub fn parse(digest: &str) -> Result<Self, StorageError> {
        parse_digest(digest)?;
        Ok(Self {
            string: digest.to_string(),
        })
    }

    /// Algorithm part of the digest
    pub fn algorithm(&self) -> &str {
        self.split().0
    }

    /// Encoded (hex) part of the digest
    pub fn encoded(&self) -> &str {
        self.split().1
    }

    /// View the digest as a raw str
    pub fn as_str(&self) -> &str {
        &self.string
    }

    fn split(&self) -> (&str, &str) {
        // Validated on construction
        self.string
            .split_once(':')
            .unwrap_or((self.string.as_str(), ""))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl FromStr for Digest {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.string)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Split a digest string into its algorithm and encoded parts
pub fn parse_digest(digest: &str) -> Result<(&str, &str), StorageError> {
    match digest.split_once(':') {
        Some((algorithm, encoded)) if !algorithm.is_empty() && !encoded.is_empty() => {
            Ok((algorithm, encoded))
        }
        _ => Err(StorageError::InvalidDigest(format!(
            "Invalid digest format: {}",
            digest
        ))),
    }
}
