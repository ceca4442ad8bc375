// change.rs — Commit and Change records as delivered by the storage layer.
//
// A Commit bundles the atomic changes written to the database in one
// VersionPress commit. The engine only consumes these records; it never
// produces or mutates them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One atomic modification of a single content entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Change {
    /// Entity type tag ("post", "comment", "usermeta", "plugin", ...).
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Action tag. Valid values depend on the entity type.
    pub action: String,

    /// Display identifier of the affected entity. May repeat across changes.
    pub name: String,

    /// Contextual metadata (parent post title, author, commit details, ...).
    #[serde(default)]
    pub tags: BTreeMap<String, serde_json::Value>,
}

impl Change {
    pub fn new(
        entity_type: impl Into<String>,
        action: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            action: action.into(),
            name: name.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Attach a tag and return self (builder pattern).
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Parsed entity kind of this change.
    pub fn kind(&self) -> EntityKind {
        EntityKind::from(self.entity_type.as_str())
    }

    /// String value of a tag, if present and a string.
    pub fn tag_str(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(|v| v.as_str())
    }
}

/// An immutable bundle of changes plus merge flag and environment metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    #[serde(default)]
    pub changes: Vec<Change>,

    /// True when the commit merges two histories rather than recording edits.
    #[serde(default)]
    pub is_merge: bool,

    /// Environment the commit was made in. Opaque to the engine.
    #[serde(default)]
    pub environment: String,
}

impl Commit {
    pub fn new(changes: Vec<Change>) -> Self {
        Self {
            changes,
            is_merge: false,
            environment: String::new(),
        }
    }

    pub fn with_merge(mut self, is_merge: bool) -> Self {
        self.is_merge = is_merge;
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Parse a commit from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, crate::OverviewError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Entity types the engine knows how to summarize specially.
///
/// Anything else lands in `Other` and is summarized by the default builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Comment,
    UserMeta,
    PostMeta,
    VersionPress,
    WordPress,
    Other(String),
}

impl From<&str> for EntityKind {
    fn from(s: &str) -> Self {
        match s {
            "post" => EntityKind::Post,
            "comment" => EntityKind::Comment,
            "usermeta" => EntityKind::UserMeta,
            "postmeta" => EntityKind::PostMeta,
            "versionpress" => EntityKind::VersionPress,
            "wordpress" => EntityKind::WordPress,
            other => EntityKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Post => write!(f, "post"),
            EntityKind::Comment => write!(f, "comment"),
            EntityKind::UserMeta => write!(f, "usermeta"),
            EntityKind::PostMeta => write!(f, "postmeta"),
            EntityKind::VersionPress => write!(f, "versionpress"),
            EntityKind::WordPress => write!(f, "wordpress"),
            EntityKind::Other(s) => write!(f, "{}", s),
        }
    }
}
