//! text.rs — Plain text output, one summary line per row.

use crate::error::OverviewError;
use crate::output_adapters::{OutputAdapter, RenderContext};

#[derive(Default)]
pub struct TextAdapter {}

impl TextAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl OutputAdapter for TextAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, OverviewError> {
        let mut output = String::new();
        for line in ctx.overview.iter() {
            output.push_str("- ");
            output.push_str(&line.to_plain_text());
            output.push('\n');
        }
        Ok(output)
    }

    fn name(&self) -> &str {
        "text"
    }
}
