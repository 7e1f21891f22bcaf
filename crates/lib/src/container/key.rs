//! Keys for container entries.
//!
//! A [`Key`] is either a non-negative integer index (the positions of a
//! sequence) or a string name (the fields of a map). Both live side by side in
//! the same container, the way decoded JSON arrays and objects both end up as
//! one container type.

use std::fmt;

/// Key of a single container entry.
///
/// Integer and string keys never compare equal: `Key::Index(0)` and
/// `Key::Name("0".into())` are two different entries. Dot paths bridge the
/// gap by trying the name first and the index second, see
/// [`Cover::get_path`](crate::Cover::get_path).
///
/// ```
/// # use cover::Key;
/// assert_eq!(Key::from(3usize), Key::Index(3));
/// assert_eq!(Key::from("name"), Key::Name("name".to_string()));
/// assert_eq!(Key::from_segment("7"), Key::Index(7));
/// assert_eq!(Key::from_segment("07"), Key::Name("07".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Position in a sequence
    Index(usize),
    /// Field of a map
    Name(String),
}

impl Key {
    /// Returns the index if this is an integer key
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(s) => Some(s),
            Key::Index(_) => None,
        }
    }

    /// Returns true for integer keys
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Parses a path segment into a key.
    ///
    /// Canonical unsigned integers (`"0"`, `"12"`, but not `"012"` or `"+1"`)
    /// become [`Key::Index`]; everything else is a [`Key::Name`].
    pub fn from_segment(segment: &str) -> Self {
        match parse_index(segment) {
            Some(index) => Key::Index(index),
            None => Key::Name(segment.to_string()),
        }
    }
}

/// Parses a canonical unsigned decimal integer.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Index(value as usize)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        match usize::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

// Negative integers cannot index a sequence; they are kept as names.
impl From<i32> for Key {
    fn from(value: i32) -> Self {
        match usize::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Name(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Name(value.clone())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
