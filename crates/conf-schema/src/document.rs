//! Declarative schema documents.
//!
//! Schemas can be authored as TOML or JSON documents instead of code. A
//! document carries a `fields` table whose entries mirror the builder
//! options; holders nest via their own `fields` table and or-groups list
//! their alternatives under `sources`:
//!
//! ```toml
//! [fields.editor]
//! kind = "or"
//!
//! [[fields.editor.sources]]
//! kind = "string"
//! source = "VISUAL"
//!
//! [[fields.editor.sources]]
//! kind = "string"
//! source = "EDITOR"
//!
//! [fields.server]
//! kind = "holder"
//!
//! [fields.server.fields.port]
//! kind = "number"
//! source = "PORT"
//! default = 8080
//! ```
//!
//! Custom parsers are referenced by name and resolved against a
//! [`ParserRegistry`] when the document is turned into a [`Schema`].

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::{Error, Result};
use crate::node::{Field, Holder, Kind, OrGroup, ParserFn, SchemaNode};
use crate::schema::Schema;

/// Named custom parsers referenced by schema documents.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<String, ParserFn>,
}

impl ParserRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parser under a name.
    ///
    /// If the name was already registered, the previous parser is replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parser: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) {
        self.parsers.insert(name.into(), std::sync::Arc::new(parser));
    }

    /// Get the parser registered under a name.
    pub fn get(&self, name: &str) -> Option<&ParserFn> {
        self.parsers.get(name)
    }

    /// Check if a parser is registered under a name.
    pub fn has(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// List all registered parser names, sorted.
    pub fn parser_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.parsers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.parser_names())
            .finish()
    }
}

/// A parsed schema document, not yet bound to a parser registry.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    fields: BTreeMap<String, DocumentNode>,
}

/// One document entry. Structural kinds (`holder`, `or`) use `fields` /
/// `sources`; everything else is a field entry.
#[derive(Debug, Clone, Deserialize)]
struct DocumentNode {
    kind: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    default: Option<Value>,
    #[serde(default)]
    of: Option<Vec<Value>>,
    #[serde(default)]
    parser: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: BTreeMap<String, DocumentNode>,
    #[serde(default)]
    sources: Vec<DocumentNode>,
}

impl SchemaDocument {
    /// Parse a document from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let document: SchemaDocument = toml::from_str(content)?;
        Ok(document)
    }

    /// Parse a document from JSON content.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(content)?;
        Ok(document)
    }

    /// Number of top-level entries in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the schema this document describes, resolving parser names
    /// against `parsers`.
    pub fn into_schema(self, parsers: &ParserRegistry) -> Result<Schema> {
        let schema = build_level(self.fields, parsers)?;
        tracing::debug!(entries = schema.len(), "Built schema from document");
        Ok(schema)
    }
}

fn build_level(
    nodes: BTreeMap<String, DocumentNode>,
    parsers: &ParserRegistry,
) -> Result<Schema> {
    let mut schema = Schema::new();
    for (key, node) in nodes {
        let built = build_node(&key, node, parsers)?;
        schema.insert(key, built);
    }
    Ok(schema)
}

fn build_node(key: &str, node: DocumentNode, parsers: &ParserRegistry) -> Result<SchemaNode> {
    match node.kind.as_str() {
        "holder" => {
            let children = build_level(node.fields, parsers)?;
            Ok(SchemaNode::Holder(Holder::with_children(children)))
        }
        "or" => {
            if node.sources.is_empty() {
                return Err(Error::EmptyOrGroup {
                    key: key.to_string(),
                });
            }
            let mut alternatives = Vec::with_capacity(node.sources.len());
            for child in node.sources {
                match build_node(key, child, parsers)? {
                    SchemaNode::Field(field) => alternatives.push(field),
                    _ => {
                        return Err(Error::NestedOrChild {
                            key: key.to_string(),
                        });
                    }
                }
            }
            Ok(SchemaNode::Or(OrGroup::new(alternatives)))
        }
        _ => build_field(key, node, parsers).map(SchemaNode::Field),
    }
}

fn build_field(key: &str, node: DocumentNode, parsers: &ParserRegistry) -> Result<Field> {
    let source = node.source.ok_or_else(|| Error::MissingSource {
        key: key.to_string(),
    })?;

    let mut field = Field::new(Kind::from(node.kind), source);
    field.default = node.default;
    field.of = node.of;
    field.description = node.description;

    if let Some(name) = node.parser {
        let parser = parsers.get(&name).ok_or_else(|| Error::ParserNotRegistered {
            name: name.clone(),
            key: key.to_string(),
        })?;
        field.parser = Some(parser.clone());
    }

    Ok(field)
}
