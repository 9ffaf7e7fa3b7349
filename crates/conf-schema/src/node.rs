//! Schema node definitions.
//!
//! Nodes form a tagged variant ([`SchemaNode`]) so the resolution engine can
//! dispatch on the tag inside one recursive pass, rather than spreading the
//! algorithm across per-kind polymorphic behavior.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::schema::Schema;

/// Custom parser applied to a raw looked-up value in place of the built-in
/// cast. Shared so fields stay cheap to clone.
pub type ParserFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Field type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Object,
    /// Domain extension kind (e.g. a "color" kind). Only resolvable through
    /// a custom parser; the built-in cast rejects it.
    Custom(String),
}

impl Kind {
    /// The lowercase string form used by schema documents.
    pub fn as_str(&self) -> &str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Custom(name) => name,
        }
    }
}

impl From<&str> for Kind {
    fn from(name: &str) -> Self {
        match name {
            "string" => Kind::String,
            "number" => Kind::Number,
            "boolean" => Kind::Boolean,
            "object" => Kind::Object,
            other => Kind::Custom(other.to_string()),
        }
    }
}

impl From<String> for Kind {
    fn from(name: String) -> Self {
        Kind::from(name.as_str())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf schema node: one external lookup key plus its resolution policy.
///
/// `source` is the key handed to the lookup source, distinct from the
/// schema's own mapping key, which names the output field. The optional
/// pieces are passed through to the engine uninterpreted: `default` applies
/// when the raw value is absent, `parser` replaces the built-in cast, `of`
/// restricts the post-coercion value to an allowed set, and `description`
/// is metadata with no runtime effect.
#[derive(Clone)]
pub struct Field {
    pub source: String,
    pub kind: Kind,
    pub default: Option<Value>,
    pub parser: Option<ParserFn>,
    pub of: Option<Vec<Value>>,
    pub description: Option<String>,
}

impl Field {
    /// Create a field of the given kind with no options set.
    pub fn new(kind: Kind, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind,
            default: None,
            parser: None,
            of: None,
            description: None,
        }
    }

    /// Value to resolve to when the raw value is absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Custom parser replacing the built-in cast for this field.
    pub fn with_parser(
        mut self,
        parser: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Ordered set of allowed post-coercion values.
    pub fn one_of<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Human-readable description. Metadata only.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("source", &self.source)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("parser", &self.parser.as_ref().map(|_| "<parser>"))
            .field("of", &self.of)
            .field("description", &self.description)
            .finish()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        // Parsers compare by identity: same shared callable or both absent.
        let parser_eq = match (&self.parser, &other.parser) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        parser_eq
            && self.source == other.source
            && self.kind == other.kind
            && self.default == other.default
            && self.of == other.of
            && self.description == other.description
    }
}

/// Schema node grouping child nodes into a nested result object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Holder {
    pub children: Schema,
}

impl Holder {
    /// An empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Schema) -> Self {
        Self { children }
    }
}

/// Prioritized alternative fields: the engine uses the first alternative
/// whose raw value is usable. Declaration order defines priority.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrGroup {
    pub alternatives: Vec<Field>,
}

impl OrGroup {
    pub fn new(alternatives: Vec<Field>) -> Self {
        Self { alternatives }
    }
}

/// Tagged schema node variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Field(Field),
    Holder(Holder),
    Or(OrGroup),
}

impl From<Field> for SchemaNode {
    fn from(field: Field) -> Self {
        SchemaNode::Field(field)
    }
}

impl From<Holder> for SchemaNode {
    fn from(holder: Holder) -> Self {
        SchemaNode::Holder(holder)
    }
}

impl From<OrGroup> for SchemaNode {
    fn from(group: OrGroup) -> Self {
        SchemaNode::Or(group)
    }
}
