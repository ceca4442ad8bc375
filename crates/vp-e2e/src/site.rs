//! In-memory site: a comment store that records a commit per user action.
//!
//! Prepare steps reuse the selected comment when it is already in the state
//! the action needs, otherwise pick or seed one. Seeding produces no commit,
//! so running a prepare step twice leaves the site as running it once.

use std::collections::BTreeMap;

use vp_overview::tags::{COMMENT_AUTHOR, COMMENT_POST_TITLE};
use vp_overview::{Change, Commit};

use crate::error::{HarnessError, Result};
use crate::worker::{CommentSubject, CommentTestWorker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStatus {
    Pending,
    Approved,
    Trash,
    Spam,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredComment {
    pub status: CommentStatus,
    pub content: String,
    /// Status to restore on untrash.
    pub trashed_from: Option<CommentStatus>,
}

pub struct InMemorySite {
    subject: CommentSubject,
    environment: String,
    comments: BTreeMap<u64, StoredComment>,
    next_id: u64,
    selected: Option<u64>,
}

impl InMemorySite {
    pub fn new(subject: CommentSubject) -> Self {
        Self {
            subject,
            environment: "default".to_string(),
            comments: BTreeMap::new(),
            next_id: 1,
            selected: None,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn subject(&self) -> &CommentSubject {
        &self.subject
    }

    pub fn comments(&self) -> &BTreeMap<u64, StoredComment> {
        &self.comments
    }

    pub fn comment(&self, id: u64) -> Option<&StoredComment> {
        self.comments.get(&id)
    }

    fn insert(&mut self, status: CommentStatus) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.comments.insert(
            id,
            StoredComment {
                status,
                content: format!("Comment {}", id),
                trashed_from: None,
            },
        );
        id
    }

    /// Select a comment whose status satisfies `wanted`, seeding one with
    /// `seed` status when none exists.
    fn ensure(&mut self, wanted: impl Fn(CommentStatus) -> bool, seed: CommentStatus) -> u64 {
        let reusable = self
            .selected
            .filter(|id| self.comments.get(id).is_some_and(|c| wanted(c.status)));
        let id = reusable
            .or_else(|| {
                self.comments
                    .iter()
                    .find(|(_, c)| wanted(c.status))
                    .map(|(id, _)| *id)
            })
            .unwrap_or_else(|| {
                let id = self.insert(seed);
                tracing::debug!(id, ?seed, "seeded comment");
                id
            });
        self.selected = Some(id);
        id
    }

    /// Take the selected comment for an action, checking its status.
    fn take_selected(
        &mut self,
        action: &str,
        wanted: impl Fn(CommentStatus) -> bool,
    ) -> Result<u64> {
        let id = self
            .selected
            .take()
            .ok_or_else(|| HarnessError::Site(format!("no comment selected for {}", action)))?;
        match self.comments.get(&id) {
            Some(c) if wanted(c.status) => Ok(id),
            Some(c) => Err(HarnessError::Site(format!(
                "comment {} is {:?}, cannot {}",
                id, c.status, action
            ))),
            None => Err(HarnessError::Site(format!("comment {} does not exist", id))),
        }
    }

    fn set_status(&mut self, id: u64, status: CommentStatus) {
        if let Some(comment) = self.comments.get_mut(&id) {
            comment.status = status;
        }
    }

    /// The commit the storage layer records for one comment action.
    fn commit(&self, action: &str, id: u64) -> Commit {
        tracing::debug!(id, action, "recording comment commit");
        let change = Change::new("comment", action, id.to_string())
            .with_tag(COMMENT_POST_TITLE, self.subject.post_title.as_str())
            .with_tag(COMMENT_AUTHOR, self.subject.author.as_str());
        Commit::new(vec![change]).with_environment(self.environment.clone())
    }
}

fn is_live(status: CommentStatus) -> bool {
    matches!(status, CommentStatus::Pending | CommentStatus::Approved)
}

impl CommentTestWorker for InMemorySite {
    fn prepare_create_comment_awaiting_moderation(&mut self) -> Result<()> {
        Ok(())
    }

    fn create_comment_awaiting_moderation(&mut self) -> Result<Commit> {
        let id = self.insert(CommentStatus::Pending);
        Ok(self.commit("create-pending", id))
    }

    fn prepare_create_comment(&mut self) -> Result<()> {
        Ok(())
    }

    fn create_comment(&mut self) -> Result<Commit> {
        let id = self.insert(CommentStatus::Approved);
        Ok(self.commit("create", id))
    }

    fn prepare_edit_comment(&mut self) -> Result<()> {
        self.ensure(is_live, CommentStatus::Approved);
        Ok(())
    }

    fn edit_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("edit", is_live)?;
        if let Some(comment) = self.comments.get_mut(&id) {
            comment.content.push_str(" (edited)");
        }
        Ok(self.commit("edit", id))
    }

    fn prepare_trash_comment(&mut self) -> Result<()> {
        self.ensure(is_live, CommentStatus::Approved);
        Ok(())
    }

    fn trash_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("trash", is_live)?;
        if let Some(comment) = self.comments.get_mut(&id) {
            comment.trashed_from = Some(comment.status);
            comment.status = CommentStatus::Trash;
        }
        Ok(self.commit("trash", id))
    }

    fn prepare_untrash_comment(&mut self) -> Result<()> {
        let id = self.ensure(|s| s == CommentStatus::Trash, CommentStatus::Trash);
        if let Some(comment) = self.comments.get_mut(&id) {
            comment.trashed_from.get_or_insert(CommentStatus::Approved);
        }
        Ok(())
    }

    fn untrash_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("untrash", |s| s == CommentStatus::Trash)?;
        if let Some(comment) = self.comments.get_mut(&id) {
            comment.status = comment.trashed_from.take().unwrap_or(CommentStatus::Approved);
        }
        Ok(self.commit("untrash", id))
    }

    fn prepare_delete_comment(&mut self) -> Result<()> {
        self.ensure(|_| true, CommentStatus::Approved);
        Ok(())
    }

    fn delete_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("delete", |_| true)?;
        self.comments.remove(&id);
        Ok(self.commit("delete", id))
    }

    fn prepare_unapprove_comment(&mut self) -> Result<()> {
        self.ensure(|s| s == CommentStatus::Approved, CommentStatus::Approved);
        Ok(())
    }

    fn unapprove_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("unapprove", |s| s == CommentStatus::Approved)?;
        self.set_status(id, CommentStatus::Pending);
        Ok(self.commit("unapprove", id))
    }

    fn prepare_approve_comment(&mut self) -> Result<()> {
        self.ensure(|s| s == CommentStatus::Pending, CommentStatus::Pending);
        Ok(())
    }

    fn approve_comment(&mut self) -> Result<Commit> {
        let id = self.take_selected("approve", |s| s == CommentStatus::Pending)?;
        self.set_status(id, CommentStatus::Approved);
        Ok(self.commit("approve", id))
    }

    fn prepare_mark_as_spam(&mut self) -> Result<()> {
        self.ensure(is_live, CommentStatus::Approved);
        Ok(())
    }

    fn mark_as_spam(&mut self) -> Result<Commit> {
        let id = self.take_selected("mark as spam", is_live)?;
        self.set_status(id, CommentStatus::Spam);
        Ok(self.commit("spam", id))
    }

    fn prepare_mark_as_not_spam(&mut self) -> Result<()> {
        self.ensure(|s| s == CommentStatus::Spam, CommentStatus::Spam);
        Ok(())
    }

    fn mark_as_not_spam(&mut self) -> Result<Commit> {
        let id = self.take_selected("mark as not spam", |s| s == CommentStatus::Spam)?;
        self.set_status(id, CommentStatus::Approved);
        Ok(self.commit("unspam", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> InMemorySite {
        InMemorySite::new(CommentSubject::new("Hello World", "admin"))
    }

    #[test]
    fn create_records_a_single_comment_change() {
        let mut site = site();
        let commit = site.create_comment().unwrap();
        assert_eq!(commit.changes.len(), 1);
        let change = &commit.changes[0];
        assert_eq!(change.entity_type, "comment");
        assert_eq!(change.action, "create");
        assert_eq!(change.name, "1");
        assert_eq!(change.tag_str(COMMENT_POST_TITLE), Some("Hello World"));
        assert_eq!(change.tag_str(COMMENT_AUTHOR), Some("admin"));
        assert_eq!(commit.environment, "default");
    }

    #[test]
    fn prepare_is_idempotent() {
        let mut site = site();
        site.prepare_untrash_comment().unwrap();
        site.prepare_untrash_comment().unwrap();
        assert_eq!(site.comments().len(), 1);

        site.untrash_comment().unwrap();
        assert_eq!(site.comment(1).unwrap().status, CommentStatus::Approved);
    }

    #[test]
    fn prepare_reuses_existing_comment() {
        let mut site = site();
        site.create_comment_awaiting_moderation().unwrap();
        site.prepare_approve_comment().unwrap();
        site.approve_comment().unwrap();
        assert_eq!(site.comments().len(), 1);
        assert_eq!(site.comment(1).unwrap().status, CommentStatus::Approved);
    }

    #[test]
    fn untrash_restores_previous_status() {
        let mut site = site();
        site.create_comment_awaiting_moderation().unwrap();
        site.prepare_trash_comment().unwrap();
        site.trash_comment().unwrap();
        site.prepare_untrash_comment().unwrap();
        site.untrash_comment().unwrap();
        assert_eq!(site.comment(1).unwrap().status, CommentStatus::Pending);
    }

    #[test]
    fn action_without_selection_fails() {
        let mut site = site();
        let err = site.delete_comment().unwrap_err();
        assert!(matches!(err, HarnessError::Site(_)));
    }

    #[test]
    fn delete_removes_the_comment() {
        let mut site = site();
        site.prepare_delete_comment().unwrap();
        let commit = site.delete_comment().unwrap();
        assert_eq!(commit.changes[0].action, "delete");
        assert!(site.comments().is_empty());
    }
}
