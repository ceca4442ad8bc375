//! Errors raised while driving a comment lifecycle.

use thiserror::Error;
use vp_overview::OverviewError;

use crate::worker::CommentLifecycleStep;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("{step} ran before prepare_{step}")]
    NotPrepared { step: CommentLifecycleStep },

    #[error("unexpected summary after {step}: expected [{expected:?}], got {actual:?}")]
    UnexpectedSummary {
        step: CommentLifecycleStep,
        expected: String,
        actual: Vec<String>,
    },

    #[error("Site error: {0}")]
    Site(String),

    #[error("Overview error: {0}")]
    Overview(#[from] OverviewError),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
