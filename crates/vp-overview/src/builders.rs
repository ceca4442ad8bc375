// builders.rs — One line builder per (type, action) family.
//
// `classify` maps a group's entity kind and action to exactly one family.
// The match is exhaustive and ends in `Other`, so every group the grouping
// engine emits has a builder without this module knowing every entity type
// callers may invent.

use crate::change::{Change, EntityKind};
use crate::collaborators::{LineCollaborators, TimeFormatter};
use crate::error::OverviewError;
use crate::grouping::{group_by, ActionGroup};
use crate::line::RenderedLine;
use crate::tags::{self, CommentTags, CommitDetails, MetaOwner};
use crate::template::{entity_refs, LineTemplate};
use crate::text;

/// Comment actions with their own wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAction {
    Create,
    CreatePending,
    Edit,
    Trash,
    Untrash,
    Delete,
    Approve,
    Unapprove,
    Spam,
    Unspam,
    Other(String),
}

impl CommentAction {
    pub fn parse(action: &str) -> Self {
        match action {
            "create" => CommentAction::Create,
            "create-pending" => CommentAction::CreatePending,
            "edit" => CommentAction::Edit,
            "trash" => CommentAction::Trash,
            "untrash" => CommentAction::Untrash,
            "delete" => CommentAction::Delete,
            "approve" => CommentAction::Approve,
            "unapprove" => CommentAction::Unapprove,
            "spam" | "mark-spam" => CommentAction::Spam,
            "unspam" | "mark-not-spam" => CommentAction::Unspam,
            other => CommentAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CommentAction::Create => "create",
            CommentAction::CreatePending => "create-pending",
            CommentAction::Edit => "edit",
            CommentAction::Trash => "trash",
            CommentAction::Untrash => "untrash",
            CommentAction::Delete => "delete",
            CommentAction::Approve => "approve",
            CommentAction::Unapprove => "unapprove",
            CommentAction::Spam => "spam",
            CommentAction::Unspam => "unspam",
            CommentAction::Other(s) => s,
        }
    }

    /// Capitalized verb opening the line.
    pub fn verb(&self) -> String {
        match self {
            CommentAction::Spam | CommentAction::Unspam => "Marked".to_string(),
            CommentAction::Trash | CommentAction::Untrash => "Moved".to_string(),
            CommentAction::CreatePending => "Created".to_string(),
            other => text::capitalize(&text::verb_to_past_tense(other.as_str())),
        }
    }

    /// Trailing qualifier after the post title.
    pub fn suffix(&self) -> &'static str {
        match self {
            CommentAction::Spam => " as spam",
            CommentAction::Unspam => " as not spam",
            CommentAction::Trash => " to trash",
            CommentAction::Untrash => " from trash",
            _ => "",
        }
    }
}

/// The builder family responsible for a (type, action) group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFamily {
    Meta(MetaOwner),
    Comment(CommentAction),
    Post,
    Rollback,
    Undo,
    Activation,
    WordPressUpdate,
    Other,
}

/// Pick the family for a group. Total: unknown combinations map to `Other`.
pub fn classify(kind: &EntityKind, action: &str) -> LineFamily {
    match (kind, action) {
        (EntityKind::UserMeta, _) => LineFamily::Meta(MetaOwner::User),
        (EntityKind::PostMeta, _) => LineFamily::Meta(MetaOwner::Post),
        (EntityKind::VersionPress, "rollback") => LineFamily::Rollback,
        (EntityKind::VersionPress, "undo") => LineFamily::Undo,
        (EntityKind::VersionPress, "activate" | "deactivate") => LineFamily::Activation,
        (EntityKind::WordPress, "update") => LineFamily::WordPressUpdate,
        (EntityKind::Comment, action) => LineFamily::Comment(CommentAction::parse(action)),
        (EntityKind::Post, _) => LineFamily::Post,
        (EntityKind::VersionPress, _)
        | (EntityKind::WordPress, _)
        | (EntityKind::Other(_), _) => LineFamily::Other,
    }
}

/// Everything a builder needs besides the group itself.
pub struct BuildContext<'a> {
    pub template: LineTemplate<'a>,
    pub time: &'a dyn TimeFormatter,
    pub collaborators: &'a dyn LineCollaborators,
}

impl BuildContext<'_> {
    /// Lines for one (type, action) group.
    pub fn build(
        &self,
        entity_type: &str,
        group: &ActionGroup<'_>,
    ) -> Result<Vec<RenderedLine>, OverviewError> {
        let family = classify(&EntityKind::from(entity_type), group.action);
        tracing::debug!(
            entity_type,
            action = group.action,
            changes = group.changes.len(),
            ?family,
            "building overview lines"
        );

        match family {
            LineFamily::Meta(owner) => self.meta_lines(owner, group),
            LineFamily::Comment(action) => self.comment_lines(&action, &group.changes),
            LineFamily::Post => self.post_lines(group),
            LineFamily::Rollback => self.rollback_lines(entity_type, group),
            LineFamily::Undo => self.undo_lines(&group.changes),
            LineFamily::Activation => Ok(vec![self.collaborators.versionpress_line(group.action)]),
            LineFamily::WordPressUpdate => Ok(group
                .changes
                .first()
                .map(|change| self.collaborators.wordpress_update_line(&change.name))
                .into_iter()
                .collect()),
            LineFamily::Other => Ok(vec![self.template.render_line(
                entity_type,
                group.action,
                entity_refs(&group.changes),
                None,
            )]),
        }
    }

    /// "<Verb> usermeta <entities> for user <login>", one line per owner.
    fn meta_lines(
        &self,
        owner: MetaOwner,
        group: &ActionGroup<'_>,
    ) -> Result<Vec<RenderedLine>, OverviewError> {
        let keyed = group
            .changes
            .iter()
            .map(|change| Ok((owner.read(*change)?, *change)))
            .collect::<Result<Vec<(&str, &Change)>, OverviewError>>()?;

        Ok(group_by(&keyed, |(owner_id, _)| *owner_id)
            .into_iter()
            .map(|(owner_id, members)| {
                let changes: Vec<&Change> = members.iter().map(|(_, c)| *c).collect();
                let suffix = RenderedLine::new()
                    .text(" for ")
                    .typed(owner.owner_label())
                    .text(" ")
                    .identifier(owner_id);
                self.template.render_line(
                    owner.meta_label(),
                    group.action,
                    entity_refs(&changes),
                    Some(suffix),
                )
            })
            .collect())
    }

    /// "<Verb> [N ]comment(s) by user <authors> for post <title><suffix>", one
    /// line per parent post.
    fn comment_lines(
        &self,
        action: &CommentAction,
        changes: &[&Change],
    ) -> Result<Vec<RenderedLine>, OverviewError> {
        let tagged = changes
            .iter()
            .copied()
            .map(CommentTags::read)
            .collect::<Result<Vec<CommentTags<'_>>, OverviewError>>()?;

        let verb = action.verb();
        Ok(group_by(&tagged, |tags| tags.post_title)
            .into_iter()
            .map(|(post_title, comments)| {
                let count = comments.len();
                let authors: Vec<&str> = text::filter_duplicates(&comments, |tags| tags.author)
                    .into_iter()
                    .map(|tags| tags.author)
                    .collect();

                let mut line = RenderedLine::new().text(format!("{} ", verb));
                if count > 1 {
                    line = line.text(format!("{} ", count));
                }
                line.typed(if count == 1 { "comment" } else { "comments" })
                    .text(" by ")
                    .typed("user")
                    .text(" ")
                    .identifier(text::join(&authors))
                    .text(" for ")
                    .typed("post")
                    .text(" ")
                    .identifier(post_title)
                    .text(action.suffix())
            })
            .collect())
    }

    /// Generic lines per post subtype; trash/untrash read as a move.
    ///
    /// Posts without a subtype tag share the group of those tagged `post`.
    fn post_lines(&self, group: &ActionGroup<'_>) -> Result<Vec<RenderedLine>, OverviewError> {
        let keyed = group
            .changes
            .iter()
            .map(|change| Ok((tags::post_type(*change)?.unwrap_or("post"), *change)))
            .collect::<Result<Vec<(&str, &Change)>, OverviewError>>()?;

        let (action, suffix) = match group.action {
            "trash" => ("move", Some(" to trash")),
            "untrash" => ("move", Some(" from trash")),
            other => (other, None),
        };

        Ok(group_by(&keyed, |(post_type, _)| *post_type)
            .into_iter()
            .map(|(post_type, members)| {
                let changes: Vec<&Change> = members.iter().map(|(_, c)| *c).collect();
                self.template.render_scoped_line(
                    "post",
                    post_type,
                    action,
                    entity_refs(&changes),
                    suffix.map(|s| RenderedLine::new().text(s)),
                )
            })
            .collect())
    }

    /// A rollback is always a single change naming the restored commit.
    fn rollback_lines(
        &self,
        entity_type: &str,
        group: &ActionGroup<'_>,
    ) -> Result<Vec<RenderedLine>, OverviewError> {
        let [change] = group.changes.as_slice() else {
            return Err(OverviewError::UnexpectedChangeCount {
                entity_type: entity_type.to_string(),
                action: group.action.to_string(),
                expected: 1,
                actual: group.changes.len(),
            });
        };
        let details = CommitDetails::read(change)?;
        Ok(vec![RenderedLine::new().text(format!(
            "The state is same as it was in \"{}\"",
            details.message
        ))])
    }

    /// One line per reverted change, with relative and absolute commit time.
    fn undo_lines(&self, changes: &[&Change]) -> Result<Vec<RenderedLine>, OverviewError> {
        changes
            .iter()
            .map(|change| {
                let details = CommitDetails::read(change)?;
                let date = details.parsed_date(change)?;
                Ok(RenderedLine::new().text(format!(
                    "Reverted change \"{}\" was made {} ({})",
                    details.message,
                    self.time.relative(&date),
                    self.time.absolute(&date)
                )))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_special_families() {
        assert_eq!(
            classify(&EntityKind::UserMeta, "edit"),
            LineFamily::Meta(MetaOwner::User)
        );
        assert_eq!(
            classify(&EntityKind::PostMeta, "create"),
            LineFamily::Meta(MetaOwner::Post)
        );
        assert_eq!(classify(&EntityKind::VersionPress, "rollback"), LineFamily::Rollback);
        assert_eq!(classify(&EntityKind::VersionPress, "undo"), LineFamily::Undo);
        assert_eq!(classify(&EntityKind::VersionPress, "activate"), LineFamily::Activation);
        assert_eq!(classify(&EntityKind::VersionPress, "deactivate"), LineFamily::Activation);
        assert_eq!(classify(&EntityKind::WordPress, "update"), LineFamily::WordPressUpdate);
        assert_eq!(
            classify(&EntityKind::Comment, "trash"),
            LineFamily::Comment(CommentAction::Trash)
        );
        assert_eq!(classify(&EntityKind::Post, "trash"), LineFamily::Post);
    }

    #[test]
    fn classify_falls_back_to_default() {
        assert_eq!(classify(&EntityKind::VersionPress, "install"), LineFamily::Other);
        assert_eq!(classify(&EntityKind::WordPress, "downgrade"), LineFamily::Other);
        assert_eq!(
            classify(&EntityKind::Other("plugin".to_string()), "activate"),
            LineFamily::Other
        );
    }

    #[test]
    fn comment_action_aliases() {
        assert_eq!(CommentAction::parse("mark-spam"), CommentAction::Spam);
        assert_eq!(CommentAction::parse("mark-not-spam"), CommentAction::Unspam);
        assert_eq!(CommentAction::parse("spam").as_str(), "spam");
        assert_eq!(
            CommentAction::parse("pin"),
            CommentAction::Other("pin".to_string())
        );
    }

    #[test]
    fn comment_verbs_and_suffixes() {
        assert_eq!(CommentAction::Spam.verb(), "Marked");
        assert_eq!(CommentAction::Unspam.suffix(), " as not spam");
        assert_eq!(CommentAction::Trash.verb(), "Moved");
        assert_eq!(CommentAction::Untrash.suffix(), " from trash");
        assert_eq!(CommentAction::CreatePending.verb(), "Created");
        assert_eq!(CommentAction::CreatePending.suffix(), "");
        assert_eq!(CommentAction::Unapprove.verb(), "Unapproved");
        assert_eq!(CommentAction::Edit.verb(), "Edited");
    }
}
