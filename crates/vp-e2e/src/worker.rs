//! The comment test worker contract and the lifecycle steps it covers.
//!
//! Every step is two-phase. `prepare_*` brings the site into the state the
//! action needs (creating a comment, trashing one, ...) without producing a
//! commit of interest. The action itself then performs exactly one
//! user-visible operation and returns the commit it produced.

use std::fmt;

use vp_overview::Commit;

use crate::error::Result;

/// Post and user every lifecycle comment is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubject {
    pub post_title: String,
    pub author: String,
}

impl CommentSubject {
    pub fn new(post_title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            post_title: post_title.into(),
            author: author.into(),
        }
    }
}

/// Drives one site implementation through the comment lifecycle.
pub trait CommentTestWorker {
    fn prepare_create_comment_awaiting_moderation(&mut self) -> Result<()>;
    fn create_comment_awaiting_moderation(&mut self) -> Result<Commit>;

    fn prepare_create_comment(&mut self) -> Result<()>;
    fn create_comment(&mut self) -> Result<Commit>;

    fn prepare_edit_comment(&mut self) -> Result<()>;
    fn edit_comment(&mut self) -> Result<Commit>;

    fn prepare_trash_comment(&mut self) -> Result<()>;
    fn trash_comment(&mut self) -> Result<Commit>;

    fn prepare_untrash_comment(&mut self) -> Result<()>;
    fn untrash_comment(&mut self) -> Result<Commit>;

    fn prepare_delete_comment(&mut self) -> Result<()>;
    fn delete_comment(&mut self) -> Result<Commit>;

    fn prepare_unapprove_comment(&mut self) -> Result<()>;
    fn unapprove_comment(&mut self) -> Result<Commit>;

    fn prepare_approve_comment(&mut self) -> Result<()>;
    fn approve_comment(&mut self) -> Result<Commit>;

    fn prepare_mark_as_spam(&mut self) -> Result<()>;
    fn mark_as_spam(&mut self) -> Result<Commit>;

    fn prepare_mark_as_not_spam(&mut self) -> Result<()>;
    fn mark_as_not_spam(&mut self) -> Result<Commit>;
}

/// One prepare/action pair of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentLifecycleStep {
    CreateCommentAwaitingModeration,
    CreateComment,
    EditComment,
    TrashComment,
    UntrashComment,
    DeleteComment,
    UnapproveComment,
    ApproveComment,
    MarkAsSpam,
    MarkAsNotSpam,
}

impl CommentLifecycleStep {
    /// All steps in the order the lifecycle runs them.
    pub const ALL: [CommentLifecycleStep; 10] = [
        CommentLifecycleStep::CreateCommentAwaitingModeration,
        CommentLifecycleStep::CreateComment,
        CommentLifecycleStep::EditComment,
        CommentLifecycleStep::TrashComment,
        CommentLifecycleStep::UntrashComment,
        CommentLifecycleStep::DeleteComment,
        CommentLifecycleStep::UnapproveComment,
        CommentLifecycleStep::ApproveComment,
        CommentLifecycleStep::MarkAsSpam,
        CommentLifecycleStep::MarkAsNotSpam,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommentLifecycleStep::CreateCommentAwaitingModeration => {
                "create_comment_awaiting_moderation"
            }
            CommentLifecycleStep::CreateComment => "create_comment",
            CommentLifecycleStep::EditComment => "edit_comment",
            CommentLifecycleStep::TrashComment => "trash_comment",
            CommentLifecycleStep::UntrashComment => "untrash_comment",
            CommentLifecycleStep::DeleteComment => "delete_comment",
            CommentLifecycleStep::UnapproveComment => "unapprove_comment",
            CommentLifecycleStep::ApproveComment => "approve_comment",
            CommentLifecycleStep::MarkAsSpam => "mark_as_spam",
            CommentLifecycleStep::MarkAsNotSpam => "mark_as_not_spam",
        }
    }

    /// Action recorded on the comment change this step produces.
    pub fn action(self) -> &'static str {
        match self {
            CommentLifecycleStep::CreateCommentAwaitingModeration => "create-pending",
            CommentLifecycleStep::CreateComment => "create",
            CommentLifecycleStep::EditComment => "edit",
            CommentLifecycleStep::TrashComment => "trash",
            CommentLifecycleStep::UntrashComment => "untrash",
            CommentLifecycleStep::DeleteComment => "delete",
            CommentLifecycleStep::UnapproveComment => "unapprove",
            CommentLifecycleStep::ApproveComment => "approve",
            CommentLifecycleStep::MarkAsSpam => "spam",
            CommentLifecycleStep::MarkAsNotSpam => "unspam",
        }
    }

    /// The single summary line the step's commit must render to.
    pub fn expected_line(self, subject: &CommentSubject) -> String {
        let (verb, suffix) = match self {
            CommentLifecycleStep::CreateCommentAwaitingModeration
            | CommentLifecycleStep::CreateComment => ("Created", ""),
            CommentLifecycleStep::EditComment => ("Edited", ""),
            CommentLifecycleStep::TrashComment => ("Moved", " to trash"),
            CommentLifecycleStep::UntrashComment => ("Moved", " from trash"),
            CommentLifecycleStep::DeleteComment => ("Deleted", ""),
            CommentLifecycleStep::UnapproveComment => ("Unapproved", ""),
            CommentLifecycleStep::ApproveComment => ("Approved", ""),
            CommentLifecycleStep::MarkAsSpam => ("Marked", " as spam"),
            CommentLifecycleStep::MarkAsNotSpam => ("Marked", " as not spam"),
        };
        format!(
            "{} comment by user {} for post {}{}",
            verb, subject.author, subject.post_title, suffix
        )
    }

    /// Run the prepare phase of this step on a worker.
    pub fn prepare(self, worker: &mut dyn CommentTestWorker) -> Result<()> {
        match self {
            CommentLifecycleStep::CreateCommentAwaitingModeration => {
                worker.prepare_create_comment_awaiting_moderation()
            }
            CommentLifecycleStep::CreateComment => worker.prepare_create_comment(),
            CommentLifecycleStep::EditComment => worker.prepare_edit_comment(),
            CommentLifecycleStep::TrashComment => worker.prepare_trash_comment(),
            CommentLifecycleStep::UntrashComment => worker.prepare_untrash_comment(),
            CommentLifecycleStep::DeleteComment => worker.prepare_delete_comment(),
            CommentLifecycleStep::UnapproveComment => worker.prepare_unapprove_comment(),
            CommentLifecycleStep::ApproveComment => worker.prepare_approve_comment(),
            CommentLifecycleStep::MarkAsSpam => worker.prepare_mark_as_spam(),
            CommentLifecycleStep::MarkAsNotSpam => worker.prepare_mark_as_not_spam(),
        }
    }

    /// Run the action phase of this step on a worker.
    pub fn perform(self, worker: &mut dyn CommentTestWorker) -> Result<Commit> {
        match self {
            CommentLifecycleStep::CreateCommentAwaitingModeration => {
                worker.create_comment_awaiting_moderation()
            }
            CommentLifecycleStep::CreateComment => worker.create_comment(),
            CommentLifecycleStep::EditComment => worker.edit_comment(),
            CommentLifecycleStep::TrashComment => worker.trash_comment(),
            CommentLifecycleStep::UntrashComment => worker.untrash_comment(),
            CommentLifecycleStep::DeleteComment => worker.delete_comment(),
            CommentLifecycleStep::UnapproveComment => worker.unapprove_comment(),
            CommentLifecycleStep::ApproveComment => worker.approve_comment(),
            CommentLifecycleStep::MarkAsSpam => worker.mark_as_spam(),
            CommentLifecycleStep::MarkAsNotSpam => worker.mark_as_not_spam(),
        }
    }
}

impl fmt::Display for CommentLifecycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_steps_are_distinct() {
        let names: HashSet<&str> = CommentLifecycleStep::ALL.iter().map(|s| s.name()).collect();
        let actions: HashSet<&str> = CommentLifecycleStep::ALL
            .iter()
            .map(|s| s.action())
            .collect();
        assert_eq!(names.len(), 10);
        assert_eq!(actions.len(), 10);
    }

    #[test]
    fn expected_lines_follow_comment_wording() {
        let subject = CommentSubject::new("Hello World", "admin");
        assert_eq!(
            CommentLifecycleStep::TrashComment.expected_line(&subject),
            "Moved comment by user admin for post Hello World to trash"
        );
        assert_eq!(
            CommentLifecycleStep::MarkAsNotSpam.expected_line(&subject),
            "Marked comment by user admin for post Hello World as not spam"
        );
        assert_eq!(
            CommentLifecycleStep::CreateCommentAwaitingModeration.expected_line(&subject),
            "Created comment by user admin for post Hello World"
        );
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(CommentLifecycleStep::MarkAsSpam.to_string(), "mark_as_spam");
    }
}
