// tags.rs — Typed views over the loosely-typed change tags.
//
// Each line family reads its context through one of these views so that a
// missing or malformed tag is reported at the boundary, with the change that
// carried it, instead of producing a half-empty summary line.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::change::Change;
use crate::error::OverviewError;

pub const COMMENT_POST_TITLE: &str = "VP-Comment-PostTitle";
pub const COMMENT_AUTHOR: &str = "VP-Comment-Author";
pub const POST_TYPE: &str = "VP-Post-Type";
pub const POST_TITLE: &str = "VP-Post-Title";
pub const USER_LOGIN: &str = "VP-User-Login";
pub const COMMIT_DETAILS: &str = "VP-Commit-Details";

/// Read a required string tag.
pub fn required_str<'a>(change: &'a Change, tag: &'static str) -> Result<&'a str, OverviewError> {
    match change.tags.get(tag) {
        None | Some(serde_json::Value::Null) => {
            tracing::warn!(
                entity_type = %change.entity_type,
                action = %change.action,
                name = %change.name,
                tag,
                "change is missing a required tag"
            );
            Err(OverviewError::MissingTag {
                entity_type: change.entity_type.clone(),
                action: change.action.clone(),
                name: change.name.clone(),
                tag,
            })
        }
        Some(serde_json::Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(OverviewError::MalformedTag {
            name: change.name.clone(),
            tag,
            reason: format!("expected a string, got {}", other),
        }),
    }
}

/// Context of a comment change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTags<'a> {
    pub post_title: &'a str,
    pub author: &'a str,
}

impl<'a> CommentTags<'a> {
    pub fn read(change: &'a Change) -> Result<Self, OverviewError> {
        Ok(Self {
            post_title: required_str(change, COMMENT_POST_TITLE)?,
            author: required_str(change, COMMENT_AUTHOR)?,
        })
    }
}

/// Which entity a meta change belongs to, and the tag naming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaOwner {
    User,
    Post,
}

impl MetaOwner {
    /// Type label of the meta entity itself.
    pub fn meta_label(self) -> &'static str {
        match self {
            MetaOwner::User => "usermeta",
            MetaOwner::Post => "postmeta",
        }
    }

    /// Type label of the owning entity.
    pub fn owner_label(self) -> &'static str {
        match self {
            MetaOwner::User => "user",
            MetaOwner::Post => "post",
        }
    }

    pub fn owner_tag(self) -> &'static str {
        match self {
            MetaOwner::User => USER_LOGIN,
            MetaOwner::Post => POST_TITLE,
        }
    }

    /// Identifier of the owning entity (user login or post title).
    pub fn read<'a>(self, change: &'a Change) -> Result<&'a str, OverviewError> {
        required_str(change, self.owner_tag())
    }
}

/// Post subtype ("post", "page", "attachment", ...). Optional: an absent tag
/// yields `None`, which callers render as a plain "post".
pub fn post_type(change: &Change) -> Result<Option<&str>, OverviewError> {
    match change.tags.get(POST_TYPE) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(OverviewError::MalformedTag {
            name: change.name.clone(),
            tag: POST_TYPE,
            reason: format!("expected a string, got {}", other),
        }),
    }
}

/// Details of the commit an undo or rollback refers to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitDetails {
    pub fn read(change: &Change) -> Result<Self, OverviewError> {
        let value = change
            .tags
            .get(COMMIT_DETAILS)
            .filter(|v| !v.is_null())
            .ok_or_else(|| OverviewError::MissingTag {
                entity_type: change.entity_type.clone(),
                action: change.action.clone(),
                name: change.name.clone(),
                tag: COMMIT_DETAILS,
            })?;
        serde_json::from_value(value.clone()).map_err(|e| OverviewError::MalformedTag {
            name: change.name.clone(),
            tag: COMMIT_DETAILS,
            reason: e.to_string(),
        })
    }

    /// Commit date; required when the line mentions when the change was made.
    pub fn parsed_date(&self, change: &Change) -> Result<DateTime<FixedOffset>, OverviewError> {
        let raw = self.date.as_deref().ok_or_else(|| OverviewError::MalformedTag {
            name: change.name.clone(),
            tag: COMMIT_DETAILS,
            reason: "missing date".to_string(),
        })?;
        DateTime::parse_from_rfc3339(raw).map_err(|e| OverviewError::MalformedTag {
            name: change.name.clone(),
            tag: COMMIT_DETAILS,
            reason: format!("invalid date '{}': {}", raw, e),
        })
    }
}
