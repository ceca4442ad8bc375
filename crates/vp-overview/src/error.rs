// error.rs — Error types for the commit overview engine.
//
// Unknown entity types and actions are never errors (they fall through to the
// default line builder). Errors here mean the storage layer handed us a change
// that breaks its own contract, so the whole commit is rejected.

use thiserror::Error;

/// Errors that can occur while building a commit overview.
#[derive(Debug, Error)]
pub enum OverviewError {
    /// A change is missing a tag its (type, action) family requires.
    #[error("{entity_type}/{action} change '{name}' is missing required tag {tag}")]
    MissingTag {
        entity_type: String,
        action: String,
        name: String,
        tag: &'static str,
    },

    /// A tag is present but has the wrong shape (e.g. not a string, bad date).
    #[error("tag {tag} on change '{name}' is malformed: {reason}")]
    MalformedTag {
        name: String,
        tag: &'static str,
        reason: String,
    },

    /// A family that expects a fixed number of changes got something else.
    #[error("{entity_type}/{action} expects exactly {expected} change(s), got {actual}")]
    UnexpectedChangeCount {
        entity_type: String,
        action: String,
        expected: usize,
        actual: usize,
    },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to parse an overview config file.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to read a commit or config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
