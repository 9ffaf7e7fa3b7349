//! Schema node model and builder for the configuration resolver.
//!
//! A schema describes where each configuration value comes from, what type
//! it has, and what happens when it is missing. Schemas are plain data: a
//! mapping from output key to a tagged [`SchemaNode`] (a leaf [`Field`], a
//! nested [`Holder`], or a prioritized [`OrGroup`] of alternatives). The
//! `conf-resolve` crate interprets them against a key lookup source.
//!
//! Schemas are built either in code with the [`builder`] helpers, or loaded
//! from declarative TOML/JSON documents via [`SchemaDocument`].
//!
//! # Example
//!
//! ```
//! use conf_schema::{holder, number, string, Schema};
//!
//! let schema = Schema::new()
//!     .with("editor", string("EDITOR").with_default("vi"))
//!     .with("server", holder(Schema::new().with("port", number("PORT"))));
//!
//! assert_eq!(schema.len(), 2);
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod node;
pub mod schema;

pub use builder::{boolean, extend, field, holder, number, object, or, string};
pub use document::{ParserRegistry, SchemaDocument};
pub use error::{Error, Result};
pub use node::{Field, Holder, Kind, OrGroup, ParserFn, SchemaNode};
pub use schema::Schema;
