//! The schema mapping type.

use std::collections::BTreeMap;

use crate::node::SchemaNode;

/// Mapping from output key to schema node.
///
/// Keys are unique by construction. Iteration order is deterministic (sorted
/// by key) but carries no semantics: each key resolves independently, and
/// only the child order inside an or-group is significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    entries: BTreeMap<String, SchemaNode>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent insert, for building schemas as expressions.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.entries.insert(key.into(), node.into());
        self
    }

    /// Insert a node, returning the previous definition for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<SchemaNode>,
    ) -> Option<SchemaNode> {
        self.entries.insert(key.into(), node.into())
    }

    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, N> FromIterator<(K, N)> for Schema
where
    K: Into<String>,
    N: Into<SchemaNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}

impl<K, N> Extend<(K, N)> for Schema
where
    K: Into<String>,
    N: Into<SchemaNode>,
{
    fn extend<I: IntoIterator<Item = (K, N)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, node)| (key.into(), node.into())));
    }
}

impl IntoIterator for Schema {
    type Item = (String, SchemaNode);
    type IntoIter = std::collections::btree_map::IntoIter<String, SchemaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{boolean, string};

    #[test]
    fn insert_replaces_an_existing_definition() {
        let mut schema = Schema::new().with("flag", string("FLAG"));
        let previous = schema.insert("flag", boolean("FLAG"));

        assert_eq!(previous, Some(string("FLAG").into()));
        assert_eq!(schema.get("flag"), Some(&boolean("FLAG").into()));
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let schema: Schema = [("a", string("A")), ("b", string("B"))]
            .into_iter()
            .collect();

        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
