//! Dot paths for nested container access.
//!
//! The [`Path`]/[`PathBuf`] pair follows the same borrowed/owned pattern as
//! `std::path::Path`/`PathBuf`. Plain strings are accepted wherever a path is
//! expected, so `cover.get_path("user.profile.name")` works directly.
//!
//! # Normalization
//!
//! Paths are lenient about dots: leading, trailing and repeated dots carry no
//! meaning and empty components are skipped.
//!
//! ```rust
//! # use cover::path::{Path, PathBuf};
//! let path = PathBuf::normalize("..user..profile.");
//! assert_eq!(path.as_str(), "user.profile");
//!
//! // Borrowed paths skip empty components without allocating.
//! let raw = Path::new(".user..name");
//! assert_eq!(raw.components().collect::<Vec<_>>(), vec!["user", "name"]);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Empty string "" → empty string
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
///
/// ```rust
/// # use cover::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A borrowed dot path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned, normalized dot path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Wraps a string slice as a path.
    ///
    /// The string is not normalized; empty components are skipped on access.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty path components.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Splits off the first component, returning it with the remaining path.
    ///
    /// ```rust
    /// # use cover::path::Path;
    /// let (head, rest) = Path::new("a.b.c").split_first().unwrap();
    /// assert_eq!(head, "a");
    /// assert_eq!(rest.as_str(), "b.c");
    ///
    /// assert!(Path::new("..").split_first().is_none());
    /// ```
    pub fn split_first(&self) -> Option<(&str, &Path)> {
        let trimmed = self.inner.trim_start_matches('.');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.split_once('.') {
            Some((head, rest)) => Some((head, Path::new(rest))),
            None => Some((trimmed, Path::new(""))),
        }
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        self.components().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a PathBuf by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize_path(path),
        }
    }

    /// Adds a path to the end of this path.
    ///
    /// ```rust
    /// # use cover::path::PathBuf;
    /// let path = PathBuf::new().push("user").push("tags.0");
    /// assert_eq!(path.as_str(), "user.tags.0");
    /// ```
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if !self.inner.is_empty() {
            self.inner.push('.');
        }
        self.inner.push_str(&normalized);
        self
    }

    /// Returns the parent path, or `None` if this path has one component or less.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for PathBuf {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a [`PathBuf`] from components.
///
/// Components may be any `Display` value, so indexes mix freely with names.
///
/// ```rust
/// # use cover::path;
/// let index = 2;
/// let path = path!("users", index, "name");
/// assert_eq!(path.as_str(), "users.2.name");
///
/// assert!(path!().is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::PathBuf::new()
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::PathBuf::new().push($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
