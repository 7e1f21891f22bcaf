//! Serialization pass-through for containers.
//!
//! The container does not encode anything itself. `Serialize` writes the same
//! shape [`Cover::to_raw`] produces, and `Deserialize` decodes into a raw
//! [`serde_json::Value`] first and then normalizes it, so any self-describing
//! serde format works.
//!
//! ```
//! # use cover::CoverArray;
//! let cover = CoverArray::from_json_str(r#"{"a": {"b": [1, 2]}}"#)?;
//! assert_eq!(cover.get_path_as::<i64>("a.b.1"), Some(2));
//! assert_eq!(cover.to_json_string()?, r#"{"a":{"b":[1,2]}}"#);
//! # Ok::<(), cover::Error>(())
//! ```

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

use super::{Cover, Kind, Value};

impl<K: Kind> Serialize for Cover<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_sequence() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl<K: Kind> Serialize for Value<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(_) => serializer.serialize_unit(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Cover(cover) => cover.serialize(serializer),
        }
    }
}

impl<'de, K: Kind> Deserialize<'de> for Cover<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Cover::try_from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl<'de, K: Kind> Deserialize<'de> for Value<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl<K: Kind> Cover<K> {
    /// Serializes the container to compact JSON text
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the container to indented JSON text
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses JSON text into a container.
    ///
    /// # Errors
    /// - [`crate::Error::Serialize`] if the text is not valid JSON
    /// - [`crate::Error::Cover`] if the document is a scalar
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::try_from_raw(raw)?)
    }
}
