//! Lifecycle harness: runs worker steps and checks the rendered overview.

use vp_overview::{Commit, DisclosureState, OverviewEngine};

use crate::error::{HarnessError, Result};
use crate::worker::{CommentLifecycleStep, CommentSubject, CommentTestWorker};

/// Outcome of one completed step.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: CommentLifecycleStep,
    pub commit: Commit,
    /// Change lines of the overview, environment line excluded.
    pub lines: Vec<String>,
}

pub struct LifecycleHarness<W: CommentTestWorker> {
    worker: W,
    subject: CommentSubject,
    engine: OverviewEngine,
    prepared: Option<CommentLifecycleStep>,
    reports: Vec<StepReport>,
}

impl<W: CommentTestWorker> LifecycleHarness<W> {
    pub fn new(worker: W, subject: CommentSubject) -> Self {
        Self {
            worker,
            subject,
            engine: OverviewEngine::default(),
            prepared: None,
            reports: Vec::new(),
        }
    }

    /// Use a specific engine (builder pattern).
    pub fn with_engine(mut self, engine: OverviewEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn worker(&self) -> &W {
        &self.worker
    }

    pub fn reports(&self) -> &[StepReport] {
        &self.reports
    }

    /// Run the prepare phase of `step`. Repeating it is allowed.
    ///
    /// A failed prepare leaves no step prepared.
    pub fn prepare(&mut self, step: CommentLifecycleStep) -> Result<()> {
        tracing::debug!(%step, "prepare");
        self.prepared = None;
        step.prepare(&mut self.worker)?;
        self.prepared = Some(step);
        Ok(())
    }

    /// Run the action phase of `step` and check its summary.
    ///
    /// The step must be the one most recently prepared. A successful or
    /// failed action consumes the preparation.
    pub fn act(&mut self, step: CommentLifecycleStep) -> Result<&StepReport> {
        if self.prepared.take() != Some(step) {
            tracing::warn!(%step, "action attempted without preparation");
            return Err(HarnessError::NotPrepared { step });
        }

        let commit = step.perform(&mut self.worker)?;
        let overview = self.engine.render(&commit, &DisclosureState::new())?;
        let lines: Vec<String> = overview.lines.iter().map(|l| l.to_plain_text()).collect();

        let expected = step.expected_line(&self.subject);
        if lines.len() != 1 || lines[0] != expected {
            return Err(HarnessError::UnexpectedSummary {
                step,
                expected,
                actual: lines,
            });
        }

        tracing::info!(%step, line = %expected, "step verified");
        self.reports.push(StepReport {
            step,
            commit,
            lines,
        });
        Ok(&self.reports[self.reports.len() - 1])
    }

    /// Prepare and perform one step.
    pub fn run_step(&mut self, step: CommentLifecycleStep) -> Result<&StepReport> {
        self.prepare(step)?;
        self.act(step)
    }

    /// Run every lifecycle step in order, stopping at the first failure.
    pub fn run_all(&mut self) -> Result<&[StepReport]> {
        for step in CommentLifecycleStep::ALL {
            self.run_step(step)?;
        }
        Ok(&self.reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::InMemorySite;

    /// In-memory site whose prepare phase fails for one step.
    struct FailingPrepareSite {
        inner: InMemorySite,
        failing: CommentLifecycleStep,
    }

    impl FailingPrepareSite {
        fn check(&self, step: CommentLifecycleStep) -> Result<()> {
            if step == self.failing {
                return Err(HarnessError::Site(format!("cannot prepare {}", step)));
            }
            Ok(())
        }
    }

    macro_rules! delegate_worker {
        ($($step:ident: $prepare:ident => $action:ident),* $(,)?) => {
            impl CommentTestWorker for FailingPrepareSite {
                $(
                    fn $prepare(&mut self) -> Result<()> {
                        self.check(CommentLifecycleStep::$step)?;
                        self.inner.$prepare()
                    }

                    fn $action(&mut self) -> Result<Commit> {
                        self.inner.$action()
                    }
                )*
            }
        };
    }

    delegate_worker! {
        CreateCommentAwaitingModeration: prepare_create_comment_awaiting_moderation => create_comment_awaiting_moderation,
        CreateComment: prepare_create_comment => create_comment,
        EditComment: prepare_edit_comment => edit_comment,
        TrashComment: prepare_trash_comment => trash_comment,
        UntrashComment: prepare_untrash_comment => untrash_comment,
        DeleteComment: prepare_delete_comment => delete_comment,
        UnapproveComment: prepare_unapprove_comment => unapprove_comment,
        ApproveComment: prepare_approve_comment => approve_comment,
        MarkAsSpam: prepare_mark_as_spam => mark_as_spam,
        MarkAsNotSpam: prepare_mark_as_not_spam => mark_as_not_spam,
    }

    fn harness(failing: CommentLifecycleStep) -> LifecycleHarness<FailingPrepareSite> {
        let subject = CommentSubject::new("Hello World", "admin");
        let worker = FailingPrepareSite {
            inner: InMemorySite::new(subject.clone()),
            failing,
        };
        LifecycleHarness::new(worker, subject)
    }

    #[test]
    fn failed_prepare_clears_earlier_preparation() {
        let mut harness = harness(CommentLifecycleStep::EditComment);
        harness.prepare(CommentLifecycleStep::TrashComment).unwrap();

        let err = harness.prepare(CommentLifecycleStep::EditComment).unwrap_err();
        assert!(matches!(err, HarnessError::Site(_)));

        let err = harness.act(CommentLifecycleStep::TrashComment).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::NotPrepared {
                step: CommentLifecycleStep::TrashComment
            }
        ));
        assert!(harness.reports().is_empty());
    }

    #[test]
    fn successful_prepare_enables_its_action() {
        let mut harness = harness(CommentLifecycleStep::EditComment);
        let report = harness.run_step(CommentLifecycleStep::TrashComment).unwrap();
        assert_eq!(
            report.lines,
            vec!["Moved comment by user admin for post Hello World to trash"]
        );
    }
}
