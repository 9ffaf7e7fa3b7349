//! Immutable resolution results.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One resolved entry: a leaf value, or the nested section a holder
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Value(Value),
    Section(Resolved),
}

impl Entry {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(value) => Some(value),
            Entry::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&Resolved> {
        match self {
            Entry::Value(_) => None,
            Entry::Section(section) => Some(section),
        }
    }
}

/// Immutable mapping of output keys to resolved entries.
///
/// Keys mirror the schema's keys one-to-one, except that a key is absent
/// entirely when no value and no default applied. The type exposes no
/// mutating methods; a resolution result can only be read, cloned, or
/// serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Resolved {
    entries: BTreeMap<String, Entry>,
}

impl Resolved {
    pub(crate) fn from_entries(entries: BTreeMap<String, Entry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// The leaf value under `key`, if the key resolved to one.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(Entry::as_value)
    }

    /// The nested section under `key`, if the key was a holder.
    pub fn section(&self, key: &str) -> Option<&Resolved> {
        self.get(key).and_then(Entry::as_section)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the whole result as a JSON value, sections included.
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.entries.len());
        for (key, entry) in &self.entries {
            let value = match entry {
                Entry::Value(value) => value.clone(),
                Entry::Section(section) => section.to_value(),
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }
}
