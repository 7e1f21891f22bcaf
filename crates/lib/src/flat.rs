//! Flat, non-normalizing key-value store.
//!
//! [`Flat`] is the one-level sibling of [`Cover`](crate::Cover): it keeps raw
//! [`serde_json::Value`]s exactly as given, with no conversion of nested maps
//! or sequences and no auto-vivification. Use it for bags of options where
//! nested data should stay opaque.
//!
//! ```
//! use cover::Flat;
//! use serde_json::json;
//!
//! let mut opts = Flat::new();
//! opts.set("retries", json!(3));
//! opts.set("headers", json!({"accept": "text/plain"}));
//!
//! // Nested data stays raw
//! assert_eq!(opts.get("headers"), Some(&json!({"accept": "text/plain"})));
//! assert_eq!(opts.get("missing"), None);
//! ```

use indexmap::IndexMap;

use crate::Key;

/// One-level store of raw values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flat {
    data: IndexMap<Key, serde_json::Value>,
}

impl Flat {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the raw value stored at `key`
    pub fn get(&self, key: impl Into<Key>) -> Option<&serde_json::Value> {
        self.data.get(&key.into())
    }

    /// Gets the raw value stored under integer key `index`
    pub fn item(&self, index: usize) -> Option<&serde_json::Value> {
        self.data.get(&Key::Index(index))
    }

    /// Stores `value` unchanged, returning the previous value
    pub fn set(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.data.insert(key.into(), value.into())
    }

    /// Returns true if `key` is present
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.data.contains_key(&key.into())
    }

    /// Removes `key`, returning its value
    pub fn delete(&mut self, key: impl Into<Key>) -> Option<serde_json::Value> {
        self.data.shift_remove(&key.into())
    }

    /// Returns the backing map
    pub fn data(&self) -> &IndexMap<Key, serde_json::Value> {
        &self.data
    }

    /// Merges `entries` into the store, overwriting existing keys
    pub fn set_data<Q, I>(&mut self, entries: I) -> &mut Self
    where
        Q: Into<Key>,
        I: IntoIterator<Item = (Q, serde_json::Value)>,
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

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store has no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, serde_json::Value> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a Flat {
    type Item = (&'a Key, &'a serde_json::Value);
    type IntoIter = indexmap::map::Iter<'a, Key, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
