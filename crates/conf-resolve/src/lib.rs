//! Schema resolution engine for the configuration resolver.
//!
//! Takes a schema from `conf-schema` and a key lookup source, and produces
//! an immutable, typed configuration object in one synchronous recursive
//! pass: raw values are looked up per field, coerced to the field's kind
//! (or handed to its custom parser), defaulted when absent, filtered
//! through enumerations, and or-groups resolve to their first usable
//! alternative.
//!
//! # Example
//!
//! ```
//! use conf_resolve::{resolve, MapLookup};
//! use conf_schema::{holder, number, string, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .with("name", string("NAME").with_default("Sven"))
//!     .with("cfg", holder(Schema::new().with("port", number("PORT"))));
//!
//! let lookup = MapLookup::from_iter([("PORT", "8080")]);
//! let config = resolve(&lookup, &schema)?;
//!
//! assert_eq!(config.value("name"), Some(&json!("Sven")));
//! assert_eq!(config.section("cfg").unwrap().value("port"), Some(&json!(8080.0)));
//! # Ok::<(), conf_resolve::Error>(())
//! ```

pub mod cast;
pub mod error;
pub mod resolve;
pub mod resolved;
pub mod source;

pub use cast::cast_into_type;
pub use error::{Error, Result};
pub use resolve::resolve;
pub use resolved::{Entry, Resolved};
pub use source::{EnvLookup, Lookup, MapLookup};
