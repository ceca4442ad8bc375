// engine.rs — Composition root: commit in, ordered summary lines out.
//
// grouping → family dispatch → line builders → environment line.
// The engine holds no per-render state: the disclosure state is owned by the
// caller and passed in, so rendering the same commit twice with the same
// disclosure state yields the same lines.

use serde::{Deserialize, Serialize};

use crate::builders::BuildContext;
use crate::change::{Change, Commit};
use crate::collaborators::{ChronoTimeFormatter, DefaultCollaborators, LineCollaborators, TimeFormatter};
use crate::config::{DisplayConfig, OverviewConfig};
use crate::disclosure::DisclosureState;
use crate::error::OverviewError;
use crate::grouping::group_changes;
use crate::line::{EntityList, ListKey, RenderedLine};
use crate::template::LineTemplate;

pub const EMPTY_COMMIT_MESSAGE: &str = "No files were changed in this commit.";
pub const EMPTY_MERGE_MESSAGE: &str = "This is a merge commit. No files were changed in this commit.";

/// The rendered summary of one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Change lines in group order.
    pub lines: Vec<RenderedLine>,
    /// Trailing environment line.
    pub environment: RenderedLine,
}

impl Overview {
    /// Change lines followed by the environment line.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedLine> {
        self.lines.iter().chain(std::iter::once(&self.environment))
    }

    /// Every line as unstyled text, environment line last.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.iter().map(RenderedLine::to_plain_text).collect()
    }

    /// All entity lists across the change lines.
    pub fn entity_lists(&self) -> impl Iterator<Item = &EntityList> {
        self.lines.iter().flat_map(|line| line.entity_lists())
    }

    /// The list with the given key, if this overview renders one.
    pub fn find_list(&self, key: &ListKey) -> Option<&EntityList> {
        self.entity_lists().find(|list| &list.key == key)
    }
}

/// Builds commit overviews.
pub struct OverviewEngine {
    display: DisplayConfig,
    time: Box<dyn TimeFormatter>,
    collaborators: Box<dyn LineCollaborators>,
}

impl OverviewEngine {
    pub fn new(config: OverviewConfig) -> Self {
        Self {
            display: config.display,
            time: Box::new(ChronoTimeFormatter::anchored_now()),
            collaborators: Box::new(DefaultCollaborators),
        }
    }

    /// Replace the date formatter (builder pattern).
    pub fn with_time_formatter(mut self, time: impl TimeFormatter + 'static) -> Self {
        self.time = Box::new(time);
        self
    }

    /// Replace the delegated sentence renderers (builder pattern).
    pub fn with_collaborators(mut self, collaborators: impl LineCollaborators + 'static) -> Self {
        self.collaborators = Box::new(collaborators);
        self
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Summary lines for a list of changes, without the environment line.
    ///
    /// Either every group renders or the whole call fails.
    pub fn summarize(
        &self,
        changes: &[Change],
        is_merge: bool,
        disclosure: &DisclosureState,
    ) -> Result<Vec<RenderedLine>, OverviewError> {
        if changes.is_empty() {
            let message = if is_merge {
                EMPTY_MERGE_MESSAGE
            } else {
                EMPTY_COMMIT_MESSAGE
            };
            return Ok(vec![RenderedLine::new().emphasis(message)]);
        }

        let ctx = BuildContext {
            template: LineTemplate::new(&self.display, disclosure),
            time: self.time.as_ref(),
            collaborators: self.collaborators.as_ref(),
        };

        let groups = group_changes(changes);
        tracing::debug!(
            changes = changes.len(),
            types = groups.len(),
            expanded = disclosure.len(),
            "summarizing commit"
        );

        let mut lines = Vec::new();
        for type_group in &groups {
            for action_group in &type_group.actions {
                lines.extend(ctx.build(type_group.entity_type, action_group)?);
            }
        }
        Ok(lines)
    }

    /// Full overview of a commit: change lines plus the environment line.
    pub fn render(
        &self,
        commit: &Commit,
        disclosure: &DisclosureState,
    ) -> Result<Overview, OverviewError> {
        let lines = self.summarize(&commit.changes, commit.is_merge, disclosure)?;
        Ok(Overview {
            lines,
            environment: self.collaborators.environment_line(&commit.environment),
        })
    }
}

impl Default for OverviewEngine {
    fn default() -> Self {
        Self::new(OverviewConfig::default())
    }
}
