//! Error types for container conversions.
//!
//! Missing keys, wrong-shaped values and out-of-range sequence operations are
//! never errors in this module; they degrade to `None` or to an empty
//! container. The variants here only cover the conversion boundaries: typed
//! extraction of a value and importing a raw document whose top level is not
//! a map or sequence.

use thiserror::Error;

/// Structured error types for container conversions.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverError {
    /// A raw document had a scalar where a map or sequence was required
    #[error("expected a map or sequence, found {found}")]
    NotAContainer { found: &'static str },

    /// Typed extraction found a value of another type
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl CoverError {
    /// Check if this error is a typed-extraction mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, CoverError::TypeMismatch { .. })
    }

    /// Check if this error rejected a scalar top-level document
    pub fn is_not_a_container(&self) -> bool {
        matches!(self, CoverError::NotAContainer { .. })
    }
}

// Conversion from CoverError to the main Error type
impl From<CoverError> for crate::Error {
    fn from(err: CoverError) -> Self {
        crate::Error::Cover(err)
    }
}
