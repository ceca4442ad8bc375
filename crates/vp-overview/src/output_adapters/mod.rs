//! output_adapters — Pluggable renderers for commit overviews.
//!
//! Output adapters turn an [`Overview`] into a concrete format:
//! - **Text**: one plain line per summary line (default)
//! - **Terminal**: ANSI-styled lines with truncated lists spelled out below
//! - **HTML**: the overview list markup with "show N more" links
//! - **JSON**: machine-readable segments for other front ends

use crate::engine::Overview;
use crate::error::OverviewError;

pub mod html;
pub mod json;
pub mod terminal;
pub mod text;

/// Output format for overview rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Terminal,
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "terminal" | "term" => Ok(OutputFormat::Terminal),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format: '{}'. Valid formats: text, terminal, html, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Context for rendering an overview.
pub struct RenderContext<'a> {
    pub overview: &'a Overview,
    /// Enable ANSI styling (terminal adapter only).
    pub color: bool,
}

/// Output adapter trait — renders overviews in different formats.
pub trait OutputAdapter {
    /// Render the overview to a string.
    fn render(&self, ctx: &RenderContext) -> Result<String, OverviewError>;

    /// Adapter name (for logging/debugging).
    fn name(&self) -> &str;
}

/// Get an adapter instance for the given format.
pub fn get_adapter(format: OutputFormat) -> Box<dyn OutputAdapter> {
    match format {
        OutputFormat::Text => Box::new(text::TextAdapter::new()),
        OutputFormat::Terminal => Box::new(terminal::TerminalAdapter::new()),
        OutputFormat::Html => Box::new(html::HtmlAdapter::new()),
        OutputFormat::Json => Box::new(json::JsonAdapter::new()),
    }
}
