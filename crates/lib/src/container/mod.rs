//! The recursive container.
//!
//! [`Cover`] wraps nested associative/sequential data (decoded JSON, config
//! files, template contexts) so deeply nested structures can be read,
//! mutated and extended without checking at each level whether a key exists
//! or whether the value below it is itself a container.
//!
//! # Two kinds of "missing"
//!
//! - [`Cover::get`] is the safe read: a missing key is `None` and nothing
//!   changes.
//! - [`Cover::at`] is the lenient read: a missing key is filled with a new
//!   empty container, which is stored and returned so access can keep
//!   chaining.
//!
//! # Usage
//!
//! ```
//! use cover::{CoverArray, Value};
//! use serde_json::json;
//!
//! let mut ctx = CoverArray::from_raw(json!({
//!     "user": {"name": "Alice", "roles": ["admin"]}
//! }));
//!
//! // Safe reads
//! assert_eq!(ctx.get_path("user.name").as_deref(), Some(&Value::from("Alice")));
//! assert!(ctx.get("missing").is_none());
//!
//! // Lenient reads degrade to an empty container
//! assert!(ctx.get_path("user.address.city").unwrap().is_empty_cover());
//!
//! // Writes vivify intermediate containers
//! ctx.at("settings").at("theme").put("dark", true);
//! assert_eq!(ctx.get_path_as::<bool>("settings.theme.dark"), Some(true));
//! ```

use std::{borrow::Cow, marker::PhantomData};

use indexmap::IndexMap;

// Submodules
pub mod codec;
pub mod errors;
pub mod key;
pub mod kind;
pub mod path;
pub mod value;

// Convenience re-exports for core container types
pub use errors::CoverError;
pub use key::Key;
pub use kind::{Kind, Plain};
pub use path::{Path, PathBuf};
pub use value::Value;

use key::parse_index;

/// The general-purpose container.
pub type CoverArray = Cover<Plain>;

/// Recursive, insertion-ordered container of [`Value`]s.
///
/// Every write normalizes its value: raw maps and sequences become nested
/// `Cover<K>` of the same kind as the writer, scalars pass through. Children
/// are owned exclusively by their parent.
///
/// # Core Operations
///
/// - **Property-style access**: `get()`, `set()`, `has()`, `delete()`
/// - **Auto-vivifying access**: `at()`, `put()`, `at_path()`, `set_path()`
/// - **Sequence operations**: `prepend()`, `append()`, `first()`, `last()`
/// - **Dot paths**: `get_path()`
/// - **Raw data**: `from_raw()`, `to_raw()`, `replace_data()`, `clear()`
///
/// # Integer keys
///
/// - `append` uses the largest integer key plus one, or `0`.
/// - `prepend` inserts at `0` and renumbers every integer key after it in
///   order. String keys keep their names.
/// - `delete` never renumbers.
///
/// ```
/// # use cover::{CoverArray, Key, Value};
/// let mut list = CoverArray::new();
/// list.append(1).append(2).prepend(0);
///
/// let values: Vec<_> = list.values().cloned().collect();
/// assert_eq!(values, vec![Value::Int(0), Value::Int(1), Value::Int(2)]);
/// assert_eq!(list.keys().cloned().collect::<Vec<_>>(), vec![Key::Index(0), Key::Index(1), Key::Index(2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Cover<K: Kind = Plain> {
    /// Entries in insertion order
    data: IndexMap<Key, Value<K>>,
    /// Sequence shape, kept so an emptied or empty sequence still exports as `[]`
    sequence: bool,
    kind: PhantomData<K>,
}

impl<K: Kind> Cover<K> {
    /// Creates a new empty container
    pub fn new() -> Self {
        Self {
            data: IndexMap::new(),
            sequence: false,
            kind: PhantomData,
        }
    }

    /// Creates a new empty container shaped as a sequence.
    ///
    /// It behaves like [`Cover::new`] except that, while empty, it exports as
    /// `[]` instead of `{}`.
    pub fn new_sequence() -> Self {
        Self {
            sequence: true,
            ..Self::new()
        }
    }

    /// Creates a container from raw nested data, normalizing recursively.
    ///
    /// Object fields become [`Key::Name`] entries, array elements become
    /// [`Key::Index`] entries. A raw scalar has no entries to take, so it
    /// yields an empty container; use [`Cover::try_from_raw`] to reject it.
    pub fn from_raw(raw: serde_json::Value) -> Self {
        match Self::try_from_raw(raw) {
            Ok(cover) => cover,
            Err(err) => {
                tracing::warn!(kind = K::NAME, %err, "Raw scalar used as container data");
                Self::new()
            }
        }
    }

    /// Creates a container from raw nested data, rejecting top-level scalars.
    pub fn try_from_raw(raw: serde_json::Value) -> Result<Self, CoverError> {
        let mut cover = Self::new();
        match raw {
            serde_json::Value::Array(items) => {
                cover.sequence = true;
                cover.data.reserve(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    cover.data.insert(Key::Index(index), Value::from(item));
                }
            }
            serde_json::Value::Object(fields) => {
                cover.data.reserve(fields.len());
                for (name, field) in fields {
                    cover.data.insert(Key::Name(name), Value::from(field));
                }
            }
            scalar => {
                return Err(CoverError::NotAContainer {
                    found: raw_type_name(&scalar),
                });
            }
        }
        Ok(cover)
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the keys are exactly `0..len` in order.
    ///
    /// An empty container is a sequence when it was built from a raw array,
    /// by [`Cover::new_sequence`], or emptied after being filled by `append`
    /// or `prepend`. Sequence-like containers export as arrays.
    pub fn is_sequence(&self) -> bool {
        if self.data.is_empty() {
            return self.sequence;
        }
        self.data
            .keys()
            .enumerate()
            .all(|(position, key)| key.as_index() == Some(position))
    }

    // ===== Property-style access =====

    /// Gets the value stored at `key`, or `None`. Never mutates.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value<K>> {
        self.data.get(&key.into())
    }

    /// Gets a mutable reference to the value stored at `key`
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value<K>> {
        self.data.get_mut(&key.into())
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns None if the key doesn't exist or type conversion fails.
    ///
    /// ```
    /// # use cover::CoverArray;
    /// let mut cover = CoverArray::new();
    /// cover.set("name", "Alice");
    /// cover.set("age", 30);
    ///
    /// assert_eq!(cover.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(cover.get_as::<i64>("age"), Some(30));
    /// assert_eq!(cover.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl Into<Key>) -> Option<T>
    where
        T: TryFrom<&'a Value<K>, Error = CoverError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Gets the element stored under integer key `index`
    pub fn item(&self, index: usize) -> Option<&Value<K>> {
        self.data.get(&Key::Index(index))
    }

    /// Stores the normalized `value` at `key`, returning the previous value.
    ///
    /// An existing key keeps its position; a new key goes last.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value<K>>) -> Option<Value<K>> {
        self.data.insert(key.into(), value.into())
    }

    /// Returns true if `key` is present
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.data.contains_key(&key.into())
    }

    /// Removes `key`, returning its value. Missing keys are a no-op.
    pub fn delete(&mut self, key: impl Into<Key>) -> Option<Value<K>> {
        self.data.shift_remove(&key.into())
    }

    // ===== Auto-vivifying access =====

    /// Gets the value at `key`, creating an empty container there if absent.
    ///
    /// A present value is returned as-is, even a scalar. Calling `at` twice
    /// with no write in between returns the same container.
    pub fn at(&mut self, key: impl Into<Key>) -> &mut Value<K> {
        let key = key.into();
        if !self.data.contains_key(&key) {
            tracing::trace!(kind = K::NAME, %key, "Auto-vivifying empty container");
        }
        self.data.entry(key).or_insert_with(Value::empty_cover)
    }

    /// Stores the normalized `value` at `key` and returns the container for
    /// chained writes.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value<K>>) -> &mut Self {
        self.set(key, value);
        self
    }

    /// Index-surface spelling of [`Cover::has`]
    pub fn exists(&self, key: impl Into<Key>) -> bool {
        self.has(key)
    }

    /// Index-surface spelling of [`Cover::delete`]
    pub fn unset(&mut self, key: impl Into<Key>) -> Option<Value<K>> {
        self.delete(key)
    }

    /// Walks a dot path with [`Cover::at`] semantics, creating empty
    /// containers for every missing segment.
    ///
    /// Returns `None` only for an empty path. A walk that reaches a scalar
    /// stops there and returns the scalar.
    ///
    /// ```
    /// # use cover::{CoverArray, Value};
    /// let mut cover = CoverArray::new();
    /// *cover.at_path("a.b.c").unwrap() = Value::Bool(true);
    /// assert_eq!(cover.get_path_as::<bool>("a.b.c"), Some(true));
    /// ```
    pub fn at_path(&mut self, path: impl AsRef<Path>) -> Option<&mut Value<K>> {
        let segments: Vec<&str> = path.as_ref().components().collect();
        self.vivify(&segments)
    }

    /// Stores `value` at a dot path, creating intermediate containers.
    ///
    /// Returns false when nothing was written: the path was empty or an
    /// intermediate segment holds a scalar other than null.
    pub fn set_path(&mut self, path: impl AsRef<Path>, value: impl Into<Value<K>>) -> bool {
        let segments: Vec<&str> = path.as_ref().components().collect();
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };

        let parent = if parents.is_empty() {
            self
        } else {
            let Some(slot) = self.vivify(parents) else {
                return false;
            };
            if slot.is_null() {
                *slot = Value::empty_cover();
            }
            match slot.as_cover_mut() {
                Some(cover) => cover,
                None => {
                    tracing::debug!(
                        kind = K::NAME,
                        path = %path.as_ref(),
                        "Path runs through a scalar, nothing written"
                    );
                    return false;
                }
            }
        };

        let key = parent.segment_key(last);
        parent.set(key, value);
        true
    }

    fn vivify(&mut self, segments: &[&str]) -> Option<&mut Value<K>> {
        let (first, rest) = segments.split_first()?;
        let key = self.segment_key(first);
        let mut current = self.at(key);
        for segment in rest {
            let key = match current.as_cover() {
                Some(cover) => cover.segment_key(segment),
                None => Key::from_segment(segment),
            };
            current = current.at(key);
        }
        Some(current)
    }

    // ===== Sequence operations =====

    /// Inserts the normalized `value` as the first element.
    ///
    /// The new element takes index `0`; existing integer keys are renumbered
    /// `1, 2, ...` in their current order. String keys are unchanged.
    pub fn prepend(&mut self, value: impl Into<Value<K>>) -> &mut Self {
        if self.data.is_empty() {
            self.sequence = true;
        }
        let old = std::mem::take(&mut self.data);
        let mut data = IndexMap::with_capacity(old.len() + 1);
        data.insert(Key::Index(0), value.into());

        let mut next = 1;
        for (key, value) in old {
            let key = match key {
                Key::Index(_) => {
                    next += 1;
                    Key::Index(next - 1)
                }
                name => name,
            };
            data.insert(key, value);
        }

        self.data = data;
        self
    }

    /// Inserts the normalized `value` as the last element, at the next free
    /// integer key. This is also keyless element assignment.
    ///
    /// When the largest integer key is already `usize::MAX` there is no next
    /// key; the value is dropped and nothing changes.
    pub fn append(&mut self, value: impl Into<Value<K>>) -> &mut Self {
        let Some(index) = self.next_index() else {
            tracing::warn!(kind = K::NAME, "No free integer key after usize::MAX, append skipped");
            return self;
        };
        if self.data.is_empty() {
            self.sequence = true;
        }
        self.data.insert(Key::Index(index), value.into());
        self
    }

    /// Returns the element at the earliest insertion position
    pub fn first(&self) -> Option<&Value<K>> {
        self.data.first().map(|(_, value)| value)
    }

    /// Returns the element at the latest insertion position
    pub fn last(&self) -> Option<&Value<K>> {
        self.data.last().map(|(_, value)| value)
    }

    /// Returns a copy with the entries in reverse order.
    ///
    /// Integer keys are renumbered from `0`; string keys are preserved.
    pub fn reversed(&self) -> Self {
        let mut next = 0;
        let data = self
            .data
            .iter()
            .rev()
            .map(|(key, value)| {
                let key = match key {
                    Key::Index(_) => {
                        next += 1;
                        Key::Index(next - 1)
                    }
                    name => name.clone(),
                };
                (key, value.clone())
            })
            .collect();
        Self {
            data,
            sequence: self.sequence,
            kind: PhantomData,
        }
    }

    /// Largest integer key plus one, `0` without integer keys, `None` on overflow
    fn next_index(&self) -> Option<usize> {
        match self.data.keys().filter_map(Key::as_index).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }

    // ===== Dot paths =====

    /// Reads a value by dot path.
    ///
    /// - A single segment behaves like [`Cover::get`]: `None` when missing.
    /// - Longer paths never report absence. When a segment is missing or
    ///   walks into a scalar, the result is a new empty container (owned,
    ///   not stored).
    ///
    /// Each segment matches a string key first, then an integer key when it
    /// is a canonical unsigned integer, so `"items.0.name"` reads sequences.
    ///
    /// ```
    /// # use cover::{CoverArray, Value};
    /// # use serde_json::json;
    /// let cover = CoverArray::from_raw(json!({"a": {"b": {"c": true}}}));
    ///
    /// assert_eq!(cover.get_path("a.b.c").as_deref(), Some(&Value::Bool(true)));
    /// assert!(cover.get_path("a.b.x").unwrap().is_empty_cover());
    /// assert!(cover.get_path("missing.deeper.path").unwrap().is_empty_cover());
    /// assert!(cover.get_path("missing").is_none());
    /// ```
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<Cow<'_, Value<K>>> {
        let (head, rest) = path.as_ref().split_first()?;
        let found = self.lookup_segment(head);
        if rest.is_empty() {
            return found.map(Cow::Borrowed);
        }
        Some(match found {
            Some(Value::Cover(child)) => child.get_path_below(rest),
            _ => Self::missing_below(head),
        })
    }

    /// Reads a value by dot path with automatic type conversion using TryFrom
    pub fn get_path_as<T>(&self, path: impl AsRef<Path>) -> Option<T>
    where
        T: for<'a> TryFrom<&'a Value<K>, Error = CoverError>,
    {
        let value = self.get_path(path)?;
        T::try_from(&*value).ok()
    }

    fn get_path_below(&self, path: &Path) -> Cow<'_, Value<K>> {
        let Some((head, rest)) = path.split_first() else {
            return Cow::Owned(Value::empty_cover());
        };
        match (self.lookup_segment(head), rest.is_empty()) {
            (Some(value), true) => Cow::Borrowed(value),
            (Some(Value::Cover(child)), false) => child.get_path_below(rest),
            _ => Self::missing_below(head),
        }
    }

    fn missing_below(segment: &str) -> Cow<'static, Value<K>> {
        tracing::debug!(kind = K::NAME, segment, "Path lookup fell back to an empty container");
        Cow::Owned(Value::empty_cover())
    }

    /// Resolves one path segment against this container's keys.
    fn lookup_segment(&self, segment: &str) -> Option<&Value<K>> {
        self.data
            .get(&Key::Name(segment.to_string()))
            .or_else(|| parse_index(segment).and_then(|index| self.data.get(&Key::Index(index))))
    }

    /// Picks the key a write through `segment` should use.
    fn segment_key(&self, segment: &str) -> Key {
        let name = Key::Name(segment.to_string());
        if self.data.contains_key(&name) {
            name
        } else {
            Key::from_segment(segment)
        }
    }

    // ===== Raw data =====

    /// Converts the container and all descendants back into raw nested data.
    ///
    /// Sequence-like containers (see [`Cover::is_sequence`]) become arrays,
    /// everything else becomes an object with stringified keys. An empty
    /// container becomes `[]` if it is sequence-shaped, `{}` otherwise.
    pub fn to_raw(&self) -> serde_json::Value {
        if self.is_sequence() {
            serde_json::Value::Array(self.data.values().map(Value::to_raw).collect())
        } else {
            serde_json::Value::Object(
                self.data
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_raw()))
                    .collect(),
            )
        }
    }

    /// Returns the backing map
    pub fn data(&self) -> &IndexMap<Key, Value<K>> {
        &self.data
    }

    /// Shallow bulk set: merges `entries` into the top level, overwriting
    /// existing keys. Nothing is cleared.
    pub fn replace_data<Q, I>(&mut self, entries: I) -> &mut Self
    where
        Q: Into<Key>,
        I: IntoIterator<Item = (Q, Value<K>)>,
    {
        for (key, value) in entries {
            self.data.insert(key.into(), value);
        }
        self
    }

    /// Removes every entry
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    // ===== Iteration =====

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value<K>> {
        self.data.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value<K>> {
        self.data.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value<K>> {
        self.data.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value<K>> {
        self.data.values()
    }
}

fn raw_type_name(raw: &serde_json::Value) -> &'static str {
    match raw {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Entries are compared as sets, ignoring order. Two empty containers are
/// equal only if they share a shape.
impl<K: Kind> PartialEq for Cover<K> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.is_sequence() == other.is_sequence()
    }
}

impl<K: Kind> Default for Cover<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> From<serde_json::Value> for Cover<K> {
    fn from(raw: serde_json::Value) -> Self {
        Self::from_raw(raw)
    }
}

impl<K: Kind, Q: Into<Key>, V: Into<Value<K>>> FromIterator<(Q, V)> for Cover<K> {
    fn from_iter<T: IntoIterator<Item = (Q, V)>>(iter: T) -> Self {
        let mut cover = Self::new();
        for (key, value) in iter {
            cover.set(key, value);
        }
        cover
    }
}

impl<'a, K: Kind> IntoIterator for &'a Cover<K> {
    type Item = (&'a Key, &'a Value<K>);
    type IntoIter = indexmap::map::Iter<'a, Key, Value<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<K: Kind> IntoIterator for Cover<K> {
    type Item = (Key, Value<K>);
    type IntoIter = indexmap::map::IntoIter<Key, Value<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
