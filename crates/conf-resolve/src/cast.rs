//! Kind-specific coercion of raw looked-up values.

use conf_schema::Kind;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Cast a raw value into a field's declared kind.
///
/// Used only when the field has no custom parser. The built-in kinds are
/// deliberately permissive:
///
/// - `string` stringifies anything;
/// - `number` takes the longest leading float prefix of a string; a
///   non-numeric value resolves to `Value::Null` (JSON has no NaN) with a
///   debug diagnostic;
/// - `boolean` is `true` only for values loosely equal to `"true"`/`true`,
///   so `"false"` and every other string read as `false`;
/// - `object` passes structured values through and parses strings as JSON,
///   substituting an empty object (with an error diagnostic) when the text
///   does not parse.
///
/// A custom kind with no parser is the one fatal case.
pub fn cast_into_type(kind: &Kind, value: Value) -> Result<Value> {
    match kind {
        Kind::String => Ok(cast_string(value)),
        Kind::Number => Ok(cast_number(value)),
        Kind::Boolean => Ok(Value::Bool(is_loosely_true(&value))),
        Kind::Object => Ok(cast_object(value)),
        Kind::Custom(name) => Err(Error::UnsupportedKind {
            kind: name.clone(),
            value,
        }),
    }
}

fn cast_string(value: Value) -> Value {
    match value {
        Value::String(_) => value,
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        // structured values render to their JSON text
        other => Value::String(other.to_string()),
    }
}

fn cast_number(value: Value) -> Value {
    if let Value::Number(_) = value {
        return value;
    }

    let parsed = match &value {
        Value::String(s) => leading_float(s),
        _ => None,
    };

    match parsed.and_then(serde_json::Number::from_f64) {
        Some(n) => Value::Number(n),
        None => {
            tracing::debug!(raw = %value, "Non-numeric value for number field, resolving to null");
            Value::Null
        }
    }
}

/// Loose equality against `"true"`/`true`: the string `"true"`, the boolean
/// `true`, and the number `1` qualify.
fn is_loosely_true(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn cast_object(value: Value) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) => value,
        Value::String(s) => match serde_json::from_str(&s) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::error!(raw = %s, %err, "Cannot parse object field value, substituting an empty object");
                Value::Object(Map::new())
            }
        },
        // scalar JSON text re-parses to itself
        other => other,
    }
}

/// Longest leading float prefix of `s`: optional sign, digits with an
/// optional fraction, and an exponent only when it is complete.
fn leading_float(s: &str) -> Option<f64> {
    let text = s.trim_start();
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
        digits += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    let mut end = pos;
    if matches!(bytes.get(pos), Some(&b'e') | Some(&b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(&b'+') | Some(&b'-')) {
            exp += 1;
        }
        let mut exp_digits = 0;
        while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            exp += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = exp;
        }
    }

    text[..end].parse().ok()
}
