//! The recursive resolution pass.

use conf_schema::{Field, Holder, OrGroup, Schema, SchemaNode};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cast::cast_into_type;
use crate::error::Result;
use crate::resolved::{Entry, Resolved};
use crate::source::Lookup;

/// Resolve `schema` against `lookup`, producing an immutable result whose
/// keys mirror the schema's.
///
/// Each level runs in two phases. The selection phase reduces every
/// or-group to a single borrowed field (first alternative with a usable raw
/// value, else the group's first). The value phase then looks up, parses or
/// casts, applies defaults, and enforces enumerations per field; holders
/// recurse. The schema is only borrowed, so repeated calls are idempotent
/// and concurrent calls against one schema are safe whenever the lookup is.
///
/// Fails on a custom-kind field with no parser; every other condition is a
/// documented value outcome (key omission, default, or null), not an error.
pub fn resolve<L: Lookup>(lookup: &L, schema: &Schema) -> Result<Resolved> {
    let mut entries = BTreeMap::new();

    for (key, node) in schema.iter() {
        match plan(lookup, node) {
            Some(Planned::Holder(holder)) => {
                let section = resolve(lookup, &holder.children)?;
                entries.insert(key.to_string(), Entry::Section(section));
            }
            Some(Planned::Field(field)) => {
                if let Some(value) = resolve_field(lookup, field)? {
                    entries.insert(key.to_string(), Entry::Value(value));
                }
            }
            None => {}
        }
    }

    Ok(Resolved::from_entries(entries))
}

/// Borrowed plan slot for one schema entry. Or-groups are reduced to their
/// selected field here, without touching the schema itself.
enum Planned<'a> {
    Field(&'a Field),
    Holder(&'a Holder),
}

fn plan<'a, L: Lookup>(lookup: &L, node: &'a SchemaNode) -> Option<Planned<'a>> {
    match node {
        SchemaNode::Field(field) => Some(Planned::Field(field)),
        SchemaNode::Holder(holder) => Some(Planned::Holder(holder)),
        SchemaNode::Or(group) => select_alternative(lookup, group).map(Planned::Field),
    }
}

/// First alternative whose raw value is usable, else the group's first.
///
/// Absent values, nulls, and empty strings are unusable; `false` and `0`
/// count as present. An empty group selects nothing and its key is omitted.
fn select_alternative<'a, L: Lookup>(lookup: &L, group: &'a OrGroup) -> Option<&'a Field> {
    group
        .alternatives
        .iter()
        .find(|field| {
            lookup
                .lookup(&field.source)
                .is_some_and(|raw| !is_empty_raw(&raw))
        })
        .or_else(|| group.alternatives.first())
}

fn is_empty_raw(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn resolve_field<L: Lookup>(lookup: &L, field: &Field) -> Result<Option<Value>> {
    let raw = lookup
        .lookup(&field.source)
        .filter(|value| !value.is_null());

    let mut resolved = match raw {
        Some(raw) => Some(match &field.parser {
            Some(parser) => parser(&raw),
            None => cast_into_type(&field.kind, raw)?,
        }),
        // a null default counts as no default
        None => field.default.clone().filter(|value| !value.is_null()),
    };

    if let Some(allowed) = &field.of {
        let admitted = resolved
            .as_ref()
            .is_some_and(|value| allowed.contains(value));
        if !admitted {
            if let Some(value) = &resolved {
                tracing::debug!(
                    source = %field.source,
                    %value,
                    "Resolved value not in enumeration, falling back"
                );
            }
            resolved = Some(
                field
                    .default
                    .clone()
                    .filter(|value| !value.is_null())
                    .unwrap_or(Value::Null),
            );
        }
    }

    Ok(resolved)
}
