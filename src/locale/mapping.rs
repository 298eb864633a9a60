//! Flat locale mapping type.

use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use super::error::LocaleError;

/// An ordered, flat key-to-string mapping parsed from a locale JSON file.
///
/// Key order matches the order of appearance in the source document. For the
/// reference locale this order is canonical: it defines the output order of
/// every synchronized sibling.
///
/// Values are carried as [`serde_json::Value`] so that string content
/// survives a round trip untouched; the constructor guarantees every value is
/// a JSON string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleMapping {
    /// Entries in document order. Always `Value::String`.
    entries: Map<String, Value>,
}

impl LocaleMapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Map::new() }
    }

    /// Parse a locale document from JSON text.
    ///
    /// The document must be a single JSON object whose values are all
    /// strings. Nested objects, arrays and non-string scalars are rejected so
    /// that a damaged file never round-trips silently. `path` is only used
    /// for error reporting.
    ///
    /// # Errors
    /// - JSON syntax error
    /// - the root is not an object
    /// - a value is not a string
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self, LocaleError> {
        let document: Value = serde_json::from_str(text)
            .map_err(|source| LocaleError::Parse { path: path.to_path_buf(), source })?;

        let Value::Object(entries) = document else {
            return Err(LocaleError::NotAnObject { path: path.to_path_buf() });
        };

        if let Some((key, _)) = entries.iter().find(|(_, value)| !value.is_string()) {
            return Err(LocaleError::NonStringValue {
                path: path.to_path_buf(),
                key: key.clone(),
            });
        }

        Ok(Self { entries })
    }

    /// Serialize as 2-space-indented JSON.
    ///
    /// # Errors
    /// Fails only when the underlying serializer fails, which a flat string
    /// map does not trigger in practice.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get the string content for a key.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Insert an entry, appending it to the key order when new.
    ///
    /// Returns the previous value when the key already existed.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    /// Iterate keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}
