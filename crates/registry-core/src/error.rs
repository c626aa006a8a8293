//! Coded registry errors and the error envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::errcode::ErrorCode;

/// Boxed error accepted by [`Errors::push_err`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A single coded error with an optional detail payload
///
/// Serializes to `{"code": ..., "message": ..., "detail": ...}`, leaving out
/// an empty message and an absent detail.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("{}: {}", .code.title(), .message)]
pub struct Error {
    #[serde(default)]
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Error {
    /// Create an error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    /// Create an error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach (or replace) the detail payload
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Error::new(code)
    }
}

/// Ordered collection of errors returned in a registry response body
///
/// The envelope serializes as `{"errors": [...]}`, omitting the array when it
/// is empty. Callers responding with a failure status must push at least one
/// error first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Errors {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<Error>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an error with the code's default message and no detail
    pub fn push(&mut self, code: ErrorCode) {
        self.errors.push(Error::new(code));
    }

    /// Push an error with the code's default message and one detail value
    pub fn push_with_detail(&mut self, code: ErrorCode, detail: impl Into<Value>) {
        self.errors.push(Error::new(code).with_detail(detail));
    }

    /// Push an error whose detail is another error.
    ///
    /// Only the detail error's text is kept; its type and source chain are
    /// dropped.
    pub fn push_with_error<E>(&mut self, code: ErrorCode, detail: &E)
    where
        E: std::error::Error + ?Sized,
    {
        self.push_with_detail(code, detail.to_string());
    }

    /// Push an arbitrary error.
    ///
    /// An [`Error`] is stored as is. Anything else becomes an
    /// [`ErrorCode::Unknown`] error whose message is the original's text.
    pub fn push_err<E>(&mut self, err: E)
    where
        E: Into<BoxError>,
    {
        match err.into().downcast::<Error>() {
            Ok(err) => self.errors.push(*err),
            Err(other) => {
                debug!("Wrapping uncoded error: {}", other);
                self.errors
                    .push(Error::with_message(ErrorCode::Unknown, other.to_string()));
            }
        }
    }

    /// Remove all errors, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Current number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&Error> {
        self.errors.first()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("<nil>"),
            [only] => write!(f, "{}", only),
            errors => {
                f.write_str("errors:\n")?;
                for err in errors {
                    writeln!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Errors {}

impl From<Error> for Errors {
    fn from(err: Error) -> Self {
        Self { errors: vec![err] }
    }
}

impl Extend<Error> for Errors {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
