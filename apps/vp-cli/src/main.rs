//! # vp-cli
//!
//! Command-line interface for VersionPress commit overviews.
//!
//! - `vp render <commit.json>` — render the summary lines of a commit
//! - `vp groups <commit.json>` — show how the commit's changes are grouped

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vp_overview::OutputFormat;

/// VersionPress commit overview CLI.
#[derive(Parser)]
#[command(name = "vp", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the overview of a commit.
    Render {
        /// Commit JSON file as recorded by the storage layer.
        commit: PathBuf,
        /// Output format: text, terminal, html, json.
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// Show an entity list in full (repeatable). Keys look like `post|||create|||`.
        #[arg(long = "expand", value_name = "KEY")]
        expand: Vec<String>,
        /// Config file (defaults to .vp/overview.toml under the project root).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Force ANSI color in terminal output.
        #[arg(long)]
        color: bool,
    },
    /// Show the (type, action) groups of a commit with change counts.
    Groups {
        /// Commit JSON file as recorded by the storage layer.
        commit: PathBuf,
        /// Print the groups as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vp_overview=warn".parse()?)
                .add_directive("vp_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);

    match &cli.command {
        Commands::Render {
            commit,
            format,
            expand,
            config,
            color,
        } => commands::render::execute(
            &project_root,
            commit,
            *format,
            expand,
            config.as_deref(),
            *color,
        ),
        Commands::Groups { commit, json } => commands::groups::execute(commit, *json),
    }
}
