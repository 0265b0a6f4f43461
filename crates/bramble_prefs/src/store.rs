//! In-memory typed preference store.
//!
//! Keys are arbitrary strings; values are one of four closed types. Typed
//! getters take a default so lookups never fail: a missing key or an entry
//! of a different type both fall back to the default. Type mismatches are
//! logged at debug level since they usually indicate a key collision.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A value a preference entry can hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PrefValue {
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i32),
    /// Single-precision float.
    Float(f32),
    /// Owned string.
    Str(String),
}

impl PrefValue {
    /// Short name of the held variant, for logging.
    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

/// A key paired with its stored value, as handed out by
/// [`PreferenceStore::entries`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    /// The entry's key.
    pub key: String,
    /// The entry's value.
    pub value: PrefValue,
}

/// In-memory preference store with typed accessors.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    entries: HashMap<String, PrefValue>,
}

impl PreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a boolean under `key`, replacing any previous entry.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.entries.insert(key.into(), PrefValue::Bool(value));
    }

    /// Stores an integer under `key`, replacing any previous entry.
    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.entries.insert(key.into(), PrefValue::Int(value));
    }

    /// Stores a float under `key`, replacing any previous entry.
    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.entries.insert(key.into(), PrefValue::Float(value));
    }

    /// Stores a string under `key`, replacing any previous entry.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), PrefValue::Str(value.into()));
    }

    /// Reads the boolean stored under `key`, or `default` if the key is
    /// absent or holds another type.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.lookup(key, "bool") {
            Some(PrefValue::Bool(value)) => *value,
            _ => default,
        }
    }

    /// Reads the integer stored under `key`, or `default` if the key is
    /// absent or holds another type.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.lookup(key, "int") {
            Some(PrefValue::Int(value)) => *value,
            _ => default,
        }
    }

    /// Reads the float stored under `key`, or `default` if the key is
    /// absent or holds another type.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.lookup(key, "float") {
            Some(PrefValue::Float(value)) => *value,
            _ => default,
        }
    }

    /// Reads the string stored under `key`, or `default` if the key is
    /// absent or holds another type.
    #[must_use]
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.lookup(key, "string") {
            Some(PrefValue::Str(value)) => value.clone(),
            _ => default.to_owned(),
        }
    }

    /// Shared getter plumbing: fetch and log a mismatch.
    fn lookup(&self, key: &str, requested: &'static str) -> Option<&PrefValue> {
        let value = self.entries.get(key)?;
        if value.type_name() != requested {
            tracing::debug!(
                key,
                stored = value.type_name(),
                requested,
                "preference read with mismatched type"
            );
        }
        Some(value)
    }

    /// Whether `key` has an entry of any type.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the entry under `key`. Removing an absent key is a no-op.
    pub fn delete_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Removes every entry.
    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies of every entry, in no particular order.
    #[must_use]
    pub fn entries(&self) -> Vec<PreferenceEntry> {
        self.entries
            .iter()
            .map(|(key, value)| PreferenceEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }
}
