//! Lookup sources, the engine's sole external boundary.

use serde_json::Value;
use std::collections::HashMap;

/// Key→raw-value source the engine queries during resolution.
///
/// Implementations must not fail for unknown keys (return `None`) and are
/// expected to answer promptly; the engine performs no I/O of its own.
/// `None` and `Some(Value::Null)` are both treated as "absent".
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<Value>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn lookup(&self, key: &str) -> Option<Value> {
        self(key)
    }
}

/// In-memory map-backed source.
///
/// # Example
///
/// ```
/// use conf_resolve::{Lookup, MapLookup};
///
/// let lookup = MapLookup::from_iter([("PORT", "8080")]);
/// assert_eq!(lookup.lookup("PORT"), Some("8080".into()));
/// assert_eq!(lookup.lookup("HOST"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapLookup {
    values: HashMap<String, Value>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapLookup
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Lookup for MapLookup {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// Environment-variable source. Values surface as strings; unset variables
/// (and ones holding non-UTF-8 data) read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLookup;

impl Lookup for EnvLookup {
    fn lookup(&self, key: &str) -> Option<Value> {
        std::env::var(key).ok().map(Value::String)
    }
}
