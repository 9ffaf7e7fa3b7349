//! Error types for conf-resolve

use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field declared a kind with no built-in cast and no custom parser.
    /// Fatal: aborts the whole resolution call, no partial result.
    #[error("{value} cannot be cast into {kind}")]
    UnsupportedKind { kind: String, value: Value },
}
