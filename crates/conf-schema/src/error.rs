//! Error types for conf-schema

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML deserialization error from a schema document
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON deserialization error from a schema document
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Field {key} has no source key")]
    MissingSource { key: String },

    #[error("Parser not registered: {name} (field {key})")]
    ParserNotRegistered { name: String, key: String },

    #[error("Or-group {key} has no alternatives")]
    EmptyOrGroup { key: String },

    #[error("Or-group {key} may only list plain fields")]
    NestedOrChild { key: String },
}
