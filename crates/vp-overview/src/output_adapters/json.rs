//! json.rs — JSON output adapter for machine-readable output.

use crate::error::OverviewError;
use crate::output_adapters::{OutputAdapter, RenderContext};

#[derive(Default)]
pub struct JsonAdapter {}

impl JsonAdapter {
    pub fn new() -> Self {
        Self {}
    }
}

impl OutputAdapter for JsonAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, OverviewError> {
        // Segments keep their kinds, so front ends can style them their own way.
        let json = serde_json::to_string_pretty(ctx.overview).map_err(|e| {
            OverviewError::InvalidData(format!("JSON serialization failed: {}", e))
        })?;

        Ok(json)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Overview;
    use crate::output_adapters::fixtures;

    #[test]
    fn renders_valid_json() {
        let overview = fixtures::overview();
        let ctx = RenderContext {
            overview: &overview,
            color: false,
        };
        let output = JsonAdapter::new().render(&ctx).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["lines"][0][1]["kind"], "type");
        assert_eq!(value["lines"][1][3]["value"]["key"], "post|||move||| to trash");
        assert_eq!(value["lines"][1][3]["value"]["hidden"], 2);

        let parsed: Overview = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, overview);
    }
}
