// line.rs — Style-agnostic output units.
//
// A RenderedLine is a flat sequence of typed spans. Output adapters decide
// how each span kind looks; they must not reorder or reinterpret spans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text;

/// Identity of one entity list within a commit overview.
///
/// Built from the list's type label, action and suffix text so that two
/// lists in the same commit never share a key. A label that differs from
/// the change type it came from (a post subtype such as `page`) is
/// qualified as `post/page`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListKey(String);

impl ListKey {
    pub fn new(entity_type: &str, action: &str, suffix: &str) -> Self {
        Self(format!("{}|||{}|||{}", entity_type, action, suffix))
    }

    /// Key for a list labelled `type_label` built from changes of `entity_type`.
    pub fn scoped(entity_type: &str, type_label: &str, action: &str, suffix: &str) -> Self {
        if entity_type == type_label {
            Self::new(entity_type, action, suffix)
        } else {
            Self::new(&format!("{}/{}", entity_type, type_label), action, suffix)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One distinct entity and how many changes in the group touched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub name: String,
    pub count: usize,
}

impl EntityRef {
    /// "name" or "name (×3)".
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} (\u{d7}{})", self.name, self.count)
        } else {
            self.name.clone()
        }
    }
}

/// How an entity list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListLayout {
    /// Short list written into the sentence: "A, B and C".
    Inline,
    /// Long list shown as its own block, possibly truncated.
    Block,
}

/// A list of entity references inside a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityList {
    pub key: ListKey,
    pub layout: ListLayout,
    pub shown: Vec<EntityRef>,
    /// Entities collapsed behind a "show N more" affordance.
    pub hidden: usize,
}

impl EntityList {
    pub fn is_truncated(&self) -> bool {
        self.hidden > 0
    }

    fn plain_text(&self) -> String {
        let labels: Vec<String> = self.shown.iter().map(EntityRef::label).collect();
        match self.layout {
            ListLayout::Inline => text::join(&labels),
            ListLayout::Block if self.hidden > 0 => {
                format!("{} and {} more", labels.join(", "), self.hidden)
            }
            ListLayout::Block => text::join(&labels),
        }
    }
}

/// A typed text span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    /// Informational text, e.g. "No files were changed in this commit."
    Emphasis(String),
    /// Entity type or category label.
    Type(String),
    /// Entity name or value.
    Identifier(String),
    Entities(EntityList),
}

/// One summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(s.into()));
        self
    }

    pub fn emphasis(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Emphasis(s.into()));
        self
    }

    pub fn typed(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Type(s.into()));
        self
    }

    pub fn identifier(mut self, s: impl Into<String>) -> Self {
        self.segments.push(Segment::Identifier(s.into()));
        self
    }

    pub fn entities(mut self, list: EntityList) -> Self {
        self.segments.push(Segment::Entities(list));
        self
    }

    /// Append all segments of another line.
    pub fn extend(mut self, other: RenderedLine) -> Self {
        self.segments.extend(other.segments);
        self
    }

    /// Entity lists contained in this line.
    pub fn entity_lists(&self) -> impl Iterator<Item = &EntityList> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Entities(list) => Some(list),
            _ => None,
        })
    }

    /// The line as unstyled text.
    pub fn to_plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(s)
                | Segment::Emphasis(s)
                | Segment::Type(s)
                | Segment::Identifier(s) => s.clone(),
                Segment::Entities(list) => list.plain_text(),
            })
            .collect()
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_plain_text())
    }
}
