//! Builder helpers constructing schema nodes as plain data.
//!
//! These are pure factories: no validation beyond shape, no error paths.
//! Options are attached with the fluent methods on [`Field`]
//! (`with_default`, `with_parser`, `one_of`, `with_description`).

use crate::node::{Field, Holder, Kind, OrGroup};
use crate::schema::Schema;

/// A string field reading the given lookup key.
pub fn string(source: impl Into<String>) -> Field {
    Field::new(Kind::String, source)
}

/// A number field reading the given lookup key.
pub fn number(source: impl Into<String>) -> Field {
    Field::new(Kind::Number, source)
}

/// A boolean field reading the given lookup key.
pub fn boolean(source: impl Into<String>) -> Field {
    Field::new(Kind::Boolean, source)
}

/// An object field reading the given lookup key.
pub fn object(source: impl Into<String>) -> Field {
    Field::new(Kind::Object, source)
}

/// A field of an arbitrary kind, the extension point for domain kinds.
///
/// ```
/// use conf_schema::{field, Kind};
///
/// let background = field("color", "BACKGROUND").with_parser(|raw| raw.clone());
/// assert_eq!(background.kind, Kind::Custom("color".to_string()));
/// ```
pub fn field(kind: impl Into<Kind>, source: impl Into<String>) -> Field {
    Field::new(kind.into(), source)
}

/// A holder wrapping the given children into a nested result object.
pub fn holder(children: Schema) -> Holder {
    Holder::with_children(children)
}

/// An or-group trying the given fields in order.
pub fn or<I: IntoIterator<Item = Field>>(alternatives: I) -> OrGroup {
    OrGroup::new(alternatives.into_iter().collect())
}

/// A new holder overlaying `additional` onto `base`'s children.
///
/// For keys present in both, the additional definition wins. The merge is
/// shallow: an overridden holder child is replaced whole, not merged.
pub fn extend(base: &Holder, additional: Schema) -> Holder {
    let mut children = base.children.clone();
    children.extend(additional);
    Holder::with_children(children)
}
