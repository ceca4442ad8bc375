// render.rs — Render a commit overview in the requested format.

use std::path::Path;

use anyhow::Context;
use vp_overview::{
    get_adapter, Commit, DisclosureState, OutputFormat, OverviewConfig, OverviewEngine,
    RenderContext,
};

pub fn execute(
    project_root: &Path,
    commit_path: &Path,
    format: OutputFormat,
    expand: &[String],
    config_path: Option<&Path>,
    color: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => OverviewConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => OverviewConfig::load_or_default(&OverviewConfig::path_for_project(project_root)),
    };
    let commit = super::read_commit(commit_path)?;
    let output = render_commit(&commit, config, format, expand, color)?;
    print!("{}", output);
    Ok(())
}

/// Render `commit` with the given lists expanded.
pub fn render_commit(
    commit: &Commit,
    config: OverviewConfig,
    format: OutputFormat,
    expand: &[String],
    color: bool,
) -> anyhow::Result<String> {
    let color = color || config.display.color;
    let disclosure: DisclosureState = expand.iter().map(String::as_str).collect();
    let engine = OverviewEngine::new(config);
    let overview = engine.render(commit, &disclosure)?;

    for key in disclosure.iter() {
        if overview.find_list(key).is_none() {
            tracing::warn!(list_key = %key, "no entity list with this key in the commit");
        }
    }

    let adapter = get_adapter(format);
    tracing::debug!(adapter = adapter.name(), lines = overview.lines.len(), "rendering overview");
    let ctx = RenderContext {
        overview: &overview,
        color,
    };
    Ok(adapter.render(&ctx)?)
}
