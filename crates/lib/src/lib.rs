//! Cover: an auto-vivifying recursive container for nested JSON-like data.
//! This library wraps the maps and sequences produced by decoding JSON, config
//! files or template contexts so they can be read, mutated and extended
//! without checking every level by hand.
//!
//! ## Core Concepts
//!
//! * **Containers (`Cover`)**: Insertion-ordered maps from `Key` to `Value`. Every raw map or sequence written into a container becomes a nested container of the same kind.
//! * **Values (`Value`)**: Either a scalar (null, bool, int, float, text) or a nested `Cover`.
//! * **Keys (`Key`)**: Integer indexes and string names, side by side.
//! * **Kinds (`Kind`)**: A type-level tag so specialized containers build children of their own kind.
//! * **Paths (`path::Path`)**: Dot-separated lookups such as `"user.roles.0"`.
//! * **Flat stores (`Flat`)**: A one-level store that keeps raw values untouched.
//!
//! Missing data is never an error: property-style reads return `None`,
//! index-style reads create an empty container, and multi-segment path reads
//! fall back to an empty container.

pub mod container;
pub mod flat;

pub use container::{
    Cover, CoverArray, CoverError, Key, Kind, Plain, Value, path,
    path::{Path, PathBuf},
};
pub use flat::Flat;

/// Result type used throughout the Cover library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Cover library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors from the container module
    #[error(transparent)]
    Cover(container::CoverError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Cover(_) => "cover",
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Cover(cover_err) => cover_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error rejected a scalar where a container was required.
    pub fn is_not_a_container(&self) -> bool {
        match self {
            Error::Cover(cover_err) => cover_err.is_not_a_container(),
            _ => false,
        }
    }
}
