//! terminal.rs — Terminal output adapter with optional ANSI styling.
//!
//! Inline lists stay in the sentence. Block lists are written on their own
//! indented rows below the line, followed by a hint naming the list key to
//! pass to `--expand` when entities are hidden.

use crate::error::OverviewError;
use crate::line::{EntityList, ListLayout, RenderedLine, Segment};
use crate::output_adapters::{OutputAdapter, RenderContext};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";

#[derive(Default)]
pub struct TerminalAdapter {}

impl TerminalAdapter {
    pub fn new() -> Self {
        Self {}
    }

    fn paint(&self, text: &str, style: &str, color: bool) -> String {
        if color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn render_inline_list(&self, list: &EntityList, color: bool) -> String {
        let labels: Vec<String> = list
            .shown
            .iter()
            .map(|entity| self.paint(&entity.label(), BOLD, color))
            .collect();
        crate::text::join(&labels)
    }

    fn render_block_rows(&self, list: &EntityList, color: bool) -> Vec<String> {
        let mut rows: Vec<String> = list
            .shown
            .iter()
            .map(|entity| format!("    {}", self.paint(&entity.label(), BOLD, color)))
            .collect();
        if list.is_truncated() {
            let hint = format!("... {} more (--expand '{}')", list.hidden, list.key);
            rows.push(format!("    {}", self.paint(&hint, GRAY, color)));
        }
        rows
    }

    fn render_line(&self, line: &RenderedLine, color: bool) -> String {
        let mut head = String::new();
        let mut rows = Vec::new();
        for segment in &line.segments {
            match segment {
                Segment::Text(s) => head.push_str(s),
                Segment::Emphasis(s) => head.push_str(&self.paint(s, ITALIC, color)),
                Segment::Type(s) => head.push_str(&self.paint(s, CYAN, color)),
                Segment::Identifier(s) => head.push_str(&self.paint(s, BOLD, color)),
                Segment::Entities(list) => match list.layout {
                    ListLayout::Inline => head.push_str(&self.render_inline_list(list, color)),
                    ListLayout::Block => rows.extend(self.render_block_rows(list, color)),
                },
            }
        }

        // The list moved below, so collapse the spaces that surrounded it.
        let mut output = format!("- {}", collapse_spaces(head.trim_end()));
        for row in rows {
            output.push('\n');
            output.push_str(&row);
        }
        output
    }
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut previous_space = false;
    for c in s.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        out.push(c);
    }
    out
}

impl OutputAdapter for TerminalAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, OverviewError> {
        let mut output = String::new();
        for line in ctx.overview.iter() {
            output.push_str(&self.render_line(line, ctx.color));
            output.push('\n');
        }
        Ok(output)
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output_adapters::fixtures;

    #[test]
    fn block_lists_render_below_the_line() {
        let overview = fixtures::overview();
        let ctx = RenderContext {
            overview: &overview,
            color: false,
        };
        let output = TerminalAdapter::new().render(&ctx).unwrap();
        assert_eq!(
            output,
            "- Activated plugins akismet and jetpack (\u{d7}2)\n\
             - Moved posts to trash\n    A & B\n    C\n    D\n    \
             ... 2 more (--expand 'post|||move||| to trash')\n\
             - Environment: staging\n"
        );
    }

    #[test]
    fn color_wraps_types_and_identifiers() {
        let overview = fixtures::overview();
        let ctx = RenderContext {
            overview: &overview,
            color: true,
        };
        let output = TerminalAdapter::new().render(&ctx).unwrap();
        assert!(output.contains("\x1b[36mplugins\x1b[0m"));
        assert!(output.contains("\x1b[1makismet\x1b[0m"));
        assert!(output.contains("\x1b[1mstaging\x1b[0m"));
    }

    #[test]
    fn no_escape_codes_without_color() {
        let overview = fixtures::overview();
        let ctx = RenderContext {
            overview: &overview,
            color: false,
        };
        let output = TerminalAdapter::new().render(&ctx).unwrap();
        assert!(!output.contains('\x1b'));
    }
}
