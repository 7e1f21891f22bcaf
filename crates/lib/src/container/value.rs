//! Value types for containers.
//!
//! This module provides the [`Value`] enum that represents everything a
//! container can hold: either a scalar leaf or a nested [`Cover`] of the same
//! kind. It also owns normalization, the conversion of raw decoded data into
//! values, so that every write path in the crate funnels through one place.

use std::fmt;

use serde_json::Number;

use super::{Cover, CoverError, Key, Kind, Plain};

/// Values that can be stored in a container.
///
/// ## Leaf Values
/// - [`Value::Null`] - An explicit null
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - Floating point numbers
/// - [`Value::Text`] - UTF-8 text strings
///
/// ## Branch Values
/// - [`Value::Cover`] - A nested container of the same kind
///
/// # Normalization
///
/// Converting a raw [`serde_json::Value`] into a `Value` is recursive: raw
/// objects and arrays become nested containers, all the way down.
///
/// ```
/// # use cover::Value;
/// use serde_json::json;
///
/// let value: Value = json!({"user": {"tags": ["a", "b"]}}).into();
/// let user = value.get("user").unwrap();
/// assert!(user.is_cover());
/// assert!(user.get("tags").unwrap().is_cover());
/// ```
///
/// # Direct Comparisons
///
/// ```
/// # use cover::Value;
/// let text: Value = "hello".into();
/// let number: Value = 42.into();
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<K: Kind = Plain> {
    // Leaf values
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    // Branch values
    /// Nested container of the same kind
    Cover(Cover<K>),
}

impl<K: Kind> Value<K> {
    /// Creates a value holding a new empty container
    pub fn empty_cover() -> Self {
        Value::Cover(Cover::new())
    }

    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_cover()
    }

    /// Returns true if this is a nested container
    pub fn is_cover(&self) -> bool {
        matches!(self, Value::Cover(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a container without entries
    pub fn is_empty_cover(&self) -> bool {
        matches!(self, Value::Cover(cover) if cover.is_empty())
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Cover(_) => "cover",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a container (returns immutable reference)
    pub fn as_cover(&self) -> Option<&Cover<K>> {
        match self {
            Value::Cover(cover) => Some(cover),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable container reference
    pub fn as_cover_mut(&mut self) -> Option<&mut Cover<K>> {
        match self {
            Value::Cover(cover) => Some(cover),
            _ => None,
        }
    }

    /// Consumes the value, returning the container if it is one
    pub fn into_cover(self) -> Option<Cover<K>> {
        match self {
            Value::Cover(cover) => Some(cover),
            _ => None,
        }
    }

    /// Property-style read through this value.
    ///
    /// Scalars have no entries, so reading a key from one is `None`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value<K>> {
        self.as_cover()?.get(key)
    }

    /// Auto-vivifying read through this value.
    ///
    /// - container: [`Cover::at`]
    /// - `Null`: replaced by an empty container first, then [`Cover::at`]
    /// - any other scalar: returned unchanged, nothing is created
    ///
    /// ```
    /// # use cover::{CoverArray, Value};
    /// let mut root = CoverArray::new();
    /// root.at("a").at("b").put("c", true);
    /// assert_eq!(root.get_path("a.b.c").as_deref(), Some(&Value::Bool(true)));
    ///
    /// root.set("flag", 1);
    /// assert_eq!(root.at("flag").at("deeper"), &Value::Int(1));
    /// ```
    pub fn at(&mut self, key: impl Into<Key>) -> &mut Value<K> {
        if self.is_null() {
            *self = Value::empty_cover();
        }
        match self {
            Value::Cover(cover) => cover.at(key),
            other => {
                tracing::debug!(
                    kind = K::NAME,
                    found = other.type_name(),
                    "Chained access into a scalar"
                );
                other
            }
        }
    }

    /// Write path through this value, returning the value for chaining.
    ///
    /// Writes into `Null` vivify a container; writes into any other scalar are
    /// ignored.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value<K>>) -> &mut Self {
        if self.is_null() {
            *self = Value::empty_cover();
        }
        match &mut *self {
            Value::Cover(cover) => {
                cover.set(key, value);
            }
            other => {
                tracing::debug!(
                    kind = K::NAME,
                    found = other.type_name(),
                    "Ignoring write into a scalar"
                );
            }
        }
        self
    }

    /// Converts back into a raw nested structure, the inverse of normalization
    pub fn to_raw(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            // NaN and infinities have no raw representation
            Value::Float(n) => Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Cover(cover) => cover.to_raw(),
        }
    }
}

/// Maps a raw number onto the narrowest value that holds it.
fn number_to_value<K: Kind>(n: &Number) -> Value<K> {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl<K: Kind> Default for Value<K> {
    fn default() -> Self {
        Value::Null
    }
}

/// Containers and `Null` print as the empty string, so a template can print a
/// missing field without special-casing it.
impl<K: Kind> fmt::Display for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Cover(_) => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

// Normalization of raw decoded data
impl<K: Kind> From<serde_json::Value> for Value<K> {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::Text(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Cover(Cover::from_raw(nested))
            }
        }
    }
}

impl<K: Kind> From<Cover<K>> for Value<K> {
    fn from(value: Cover<K>) -> Self {
        Value::Cover(value)
    }
}

/// A plain Rust sequence is a raw sequence too.
impl<K: Kind, T: Into<Value<K>>> From<Vec<T>> for Value<K> {
    fn from(values: Vec<T>) -> Self {
        let mut cover = Cover::new_sequence();
        for value in values {
            cover.append(value);
        }
        Value::Cover(cover)
    }
}

impl<K: Kind, T: Into<Value<K>>> From<Option<T>> for Value<K> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Kind> From<bool> for Value<K> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<K: Kind> From<i64> for Value<K> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl<K: Kind> From<i32> for Value<K> {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl<K: Kind> From<u32> for Value<K> {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl<K: Kind> From<u64> for Value<K> {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl<K: Kind> From<usize> for Value<K> {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl<K: Kind> From<f64> for Value<K> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<K: Kind> From<f32> for Value<K> {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl<K: Kind> From<String> for Value<K> {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<K: Kind> From<&str> for Value<K> {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

// TryFrom implementations for typed extraction
impl<K: Kind> TryFrom<&Value<K>> for String {
    type Error = CoverError;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("String", value)),
        }
    }
}

impl<'a, K: Kind> TryFrom<&'a Value<K>> for &'a str {
    type Error = CoverError;

    fn try_from(value: &'a Value<K>) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(mismatch("&str", value)),
        }
    }
}

impl<K: Kind> TryFrom<&Value<K>> for i64 {
    type Error = CoverError;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| mismatch("i64", value))
    }
}

impl<K: Kind> TryFrom<&Value<K>> for f64 {
    type Error = CoverError;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| mismatch("f64", value))
    }
}

impl<K: Kind> TryFrom<&Value<K>> for bool {
    type Error = CoverError;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl<K: Kind> TryFrom<&Value<K>> for Cover<K> {
    type Error = CoverError;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        match value {
            Value::Cover(cover) => Ok(cover.clone()),
            _ => Err(mismatch("Cover", value)),
        }
    }
}

fn mismatch<K: Kind>(expected: &str, value: &Value<K>) -> CoverError {
    CoverError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

// PartialEq implementations for comparing Value with primitives
impl<K: Kind> PartialEq<str> for Value<K> {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl<K: Kind> PartialEq<&str> for Value<K> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl<K: Kind> PartialEq<String> for Value<K> {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl<K: Kind> PartialEq<i64> for Value<K> {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl<K: Kind> PartialEq<i32> for Value<K> {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl<K: Kind> PartialEq<f64> for Value<K> {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl<K: Kind> PartialEq<bool> for Value<K> {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl<K: Kind> PartialEq<Value<K>> for &str {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Kind> PartialEq<Value<K>> for i64 {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Kind> PartialEq<Value<K>> for bool {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}
