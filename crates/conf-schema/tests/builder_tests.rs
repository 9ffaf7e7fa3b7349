//! Tests for the builder helpers and `extend`.

use conf_schema::{boolean, extend, field, holder, number, object, or, string, Field, Kind, Schema, SchemaNode};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(string("KEY"), Kind::String)]
#[case(number("KEY"), Kind::Number)]
#[case(boolean("KEY"), Kind::Boolean)]
#[case(object("KEY"), Kind::Object)]
#[case(field("color", "KEY"), Kind::Custom("color".to_string()))]
fn constructors_produce_the_declared_kind(#[case] built: Field, #[case] expected: Kind) {
    assert_eq!(built.kind, expected);
    assert_eq!(built.source, "KEY");
    assert!(built.default.is_none());
    assert!(built.parser.is_none());
}

#[test]
fn extend_overlays_additional_children() {
    let base = holder(Schema::new().with("test", string("test")));

    let extended = extend(
        &base,
        Schema::new()
            .with("test1", string("test1"))
            .with("test2", boolean("test2")),
    );

    let expected = holder(
        Schema::new()
            .with("test", string("test"))
            .with("test1", string("test1"))
            .with("test2", boolean("test2")),
    );

    assert_eq!(extended, expected);
}

#[test]
fn extend_an_empty_holder() {
    let base = holder(Schema::new());

    let additional = Schema::new()
        .with("test1", string("test"))
        .with("test2", boolean("test1"));

    let extended = extend(&base, additional.clone());

    assert_eq!(extended, holder(additional));
}

#[test]
fn extend_overrides_existing_children() {
    let base = holder(Schema::new().with("test", boolean("test")));

    let additional = Schema::new()
        .with("test", string("test"))
        .with("test1", boolean("test1"));

    let extended = extend(&base, additional.clone());

    assert_eq!(extended, holder(additional));
}

#[test]
fn extend_does_not_touch_the_original_holder() {
    let base = holder(Schema::new().with("test", string("test")));
    let before = base.clone();

    let _ = extend(&base, Schema::new().with("other", number("other")));

    assert_eq!(base, before);
}

#[test]
fn nodes_convert_into_schema_entries() {
    let schema = Schema::new()
        .with("plain", string("PLAIN"))
        .with("nested", holder(Schema::new()))
        .with("either", or([string("A"), string("B")]));

    assert!(matches!(schema.get("plain"), Some(SchemaNode::Field(_))));
    assert!(matches!(schema.get("nested"), Some(SchemaNode::Holder(_))));
    assert!(matches!(schema.get("either"), Some(SchemaNode::Or(_))));
}
