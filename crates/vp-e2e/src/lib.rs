//! # vp-e2e
//!
//! End-to-end contract for the comment lifecycle.
//!
//! A [`CommentTestWorker`] drives one site implementation through ten
//! prepare/action pairs. The [`LifecycleHarness`] enforces that each action
//! runs only after its own prepare step, renders the commit the action
//! produced through the overview engine and checks the summary line.
//! [`InMemorySite`] is a worker backed by an in-memory comment store.

pub mod error;
pub mod harness;
pub mod site;
pub mod worker;

pub use error::{HarnessError, Result};
pub use harness::{LifecycleHarness, StepReport};
pub use site::{CommentStatus, InMemorySite};
pub use worker::{CommentLifecycleStep, CommentSubject, CommentTestWorker};
