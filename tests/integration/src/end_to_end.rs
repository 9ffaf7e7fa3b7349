//! End-to-end tests spanning schema construction, documents, and resolution.

use conf_resolve::{resolve, EnvLookup, MapLookup};
use conf_schema::{
    boolean, extend, holder, number, or, string, ParserRegistry, Schema, SchemaDocument,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[test]
fn default_applies_when_the_source_is_empty() {
    let schema = Schema::new().with("name", string("NAME").with_default("Sven"));

    let config = resolve(&MapLookup::new(), &schema).unwrap();

    assert_eq!(config.to_value(), json!({"name": "Sven"}));
}

#[test]
fn holders_produce_nested_sections() {
    let schema = Schema::new().with("cfg", holder(Schema::new().with("port", number("PORT"))));
    let lookup = MapLookup::from_iter([("PORT", "8080")]);

    let config = resolve(&lookup, &schema).unwrap();

    assert_eq!(config.to_value(), json!({"cfg": {"port": 8080.0}}));
}

#[test]
fn a_full_application_schema_resolves_in_one_pass() {
    let base = holder(
        Schema::new()
            .with("editor", or([string("VISUAL"), string("EDITOR")]))
            .with("verbose", boolean("VERBOSE").with_default(false))
            .with(
                "log_level",
                string("LOG_LEVEL")
                    .one_of(["error", "warn", "info", "debug"])
                    .with_default("info"),
            ),
    );

    // a deployment overlay replacing the verbosity switch
    let overlaid = extend(
        &base,
        Schema::new().with("verbose", boolean("DEBUG").with_default(true)),
    );

    let schema = Schema::new()
        .with("app", overlaid)
        .with("workers", number("WORKERS").with_default(4));

    let lookup = MapLookup::from_iter([
        ("VISUAL", json!("")),
        ("EDITOR", json!("vim")),
        ("LOG_LEVEL", json!("chatty")),
    ]);

    let config = resolve(&lookup, &schema).unwrap();

    assert_eq!(
        config.to_value(),
        json!({
            "app": {
                "editor": "vim",
                "verbose": true,
                "log_level": "info",
            },
            "workers": 4,
        })
    );
}

#[test]
fn a_document_schema_resolves_like_its_builder_twin() {
    let mut registry = ParserRegistry::new();
    registry.register("csv", |raw| match raw {
        Value::String(s) => json!(s.split(',').map(str::trim).collect::<Vec<_>>()),
        other => other.clone(),
    });

    let document = SchemaDocument::from_toml(
        r#"
[fields.name]
kind = "string"
source = "NAME"
default = "Sven"

[fields.tags]
kind = "string"
source = "TAGS"
parser = "csv"

[fields.server]
kind = "holder"

[fields.server.fields.port]
kind = "number"
source = "PORT"

[fields.server.fields.host]
kind = "or"

[[fields.server.fields.host.sources]]
kind = "string"
source = "HOST"

[[fields.server.fields.host.sources]]
kind = "string"
source = "BIND_ADDR"
default = "127.0.0.1"
"#,
    )
    .unwrap();

    let from_document = document.into_schema(&registry).unwrap();

    let lookup = MapLookup::from_iter([
        ("TAGS", json!("a, b,c")),
        ("PORT", json!("8080")),
        ("BIND_ADDR", json!("0.0.0.0")),
    ]);

    let config = resolve(&lookup, &from_document).unwrap();

    assert_eq!(
        config.to_value(),
        json!({
            "name": "Sven",
            "tags": ["a", "b", "c"],
            "server": {
                "port": 8080.0,
                "host": "0.0.0.0",
            },
        })
    );
}

#[test]
fn environment_variables_resolve_through_env_lookup() {
    // SAFETY: test-local variable names, no concurrent reader depends on them.
    unsafe {
        std::env::set_var("CONF_E2E_EDITOR", "emacs");
        std::env::remove_var("CONF_E2E_BROWSER");
    }

    let schema = Schema::new()
        .with("editor", string("CONF_E2E_EDITOR"))
        .with("browser", string("CONF_E2E_BROWSER").with_default("firefox"));

    let config = resolve(&EnvLookup, &schema).unwrap();

    assert_eq!(
        config.to_value(),
        json!({"editor": "emacs", "browser": "firefox"})
    );
}

#[test]
fn results_serialize_for_export() {
    let schema = Schema::new()
        .with("name", string("NAME"))
        .with("cfg", holder(Schema::new().with("debug", boolean("DEBUG"))));
    let lookup = MapLookup::from_iter([("NAME", "svc"), ("DEBUG", "true")]);

    let config = resolve(&lookup, &schema).unwrap();
    let text = serde_json::to_string(&config).unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({"name": "svc", "cfg": {"debug": true}})
    );
}
