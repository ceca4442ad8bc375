pub mod groups;
pub mod render;

use std::path::Path;

use anyhow::Context;
use vp_overview::Commit;

/// Read a commit JSON file.
pub fn read_commit(path: &Path) -> anyhow::Result<Commit> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read commit file {}", path.display()))?;
    Commit::from_json(&json).with_context(|| format!("invalid commit JSON in {}", path.display()))
}
