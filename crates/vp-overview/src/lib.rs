//! # vp-overview
//!
//! Commit overview engine for VersionPress.
//!
//! A [`Commit`] carries a flat list of [`Change`] records. The engine groups
//! them by entity type and action, picks a line builder per group and returns
//! an [`Overview`]: ordered, style-agnostic [`RenderedLine`]s followed by an
//! environment line. Long entity lists collapse behind a "show N more"
//! affordance whose state lives in a caller-owned [`DisclosureState`].
//!
//! Output adapters in [`output_adapters`] turn an overview into text,
//! terminal, HTML or JSON.

pub mod builders;
pub mod change;
pub mod collaborators;
pub mod config;
pub mod disclosure;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod line;
pub mod output_adapters;
pub mod tags;
pub mod template;
pub mod text;

pub use builders::{classify, CommentAction, LineFamily};
pub use change::{Change, Commit, EntityKind};
pub use collaborators::{ChronoTimeFormatter, DefaultCollaborators, LineCollaborators, TimeFormatter};
pub use config::{DisplayConfig, OverviewConfig};
pub use disclosure::DisclosureState;
pub use engine::{Overview, OverviewEngine, EMPTY_COMMIT_MESSAGE, EMPTY_MERGE_MESSAGE};
pub use error::OverviewError;
pub use grouping::group_changes;
pub use line::{EntityList, EntityRef, ListKey, ListLayout, RenderedLine, Segment};
pub use output_adapters::{get_adapter, OutputAdapter, OutputFormat, RenderContext};
