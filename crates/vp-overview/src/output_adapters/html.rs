//! html.rs — HTML output adapter producing the overview list markup.
//!
//! Block lists become nested `<ul>` elements. A truncated list ends with a
//! `show-more` link carrying its list key, which the host page turns into an
//! expand request.

use crate::error::OverviewError;
use crate::line::{EntityList, EntityRef, ListLayout, RenderedLine, Segment};
use crate::output_adapters::{OutputAdapter, RenderContext};

#[derive(Default)]
pub struct HtmlAdapter {}

impl HtmlAdapter {
    pub fn new() -> Self {
        Self {}
    }

    fn render_entity(&self, entity: &EntityRef) -> String {
        let mut html = format!(
            r#"<span class="identifier">{}</span>"#,
            escape(&entity.name)
        );
        if entity.count > 1 {
            html.push_str(&format!(
                r#" <span class="duplicates">(&times;{})</span>"#,
                entity.count
            ));
        }
        html
    }

    fn render_list(&self, list: &EntityList) -> String {
        let items: Vec<String> = list.shown.iter().map(|e| self.render_entity(e)).collect();
        match list.layout {
            ListLayout::Inline => crate::text::join(&items),
            ListLayout::Block => {
                let mut html = String::from(r#"<ul class="entities">"#);
                for item in &items {
                    html.push_str(&format!("<li>{}</li>", item));
                }
                if list.is_truncated() {
                    html.push_str(&format!(
                        r#"<li><a class="show-more" href="" data-list-key="{}">show {} more...</a></li>"#,
                        escape(list.key.as_str()),
                        list.hidden
                    ));
                }
                html.push_str("</ul>");
                html
            }
        }
    }

    fn render_line(&self, line: &RenderedLine) -> String {
        line.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(s) => escape(s),
                Segment::Emphasis(s) => format!("<em>{}</em>", escape(s)),
                Segment::Type(s) => format!(r#"<span class="type">{}</span>"#, escape(s)),
                Segment::Identifier(s) => {
                    format!(r#"<span class="identifier">{}</span>"#, escape(s))
                }
                Segment::Entities(list) => self.render_list(list),
            })
            .collect()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl OutputAdapter for HtmlAdapter {
    fn render(&self, ctx: &RenderContext) -> Result<String, OverviewError> {
        let mut html = String::from("<ul class=\"overview-list\">\n");
        for line in &ctx.overview.lines {
            html.push_str(&format!("  <li>{}</li>\n", self.render_line(line)));
        }
        html.push_str(&format!(
            "  <li class=\"environment\">{}</li>\n",
            self.render_line(&ctx.overview.environment)
        ));
        html.push_str("</ul>\n");
        Ok(html)
    }

    fn name(&self) -> &str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output_adapters::fixtures;

    fn render() -> String {
        let overview = fixtures::overview();
        let ctx = RenderContext {
            overview: &overview,
            color: false,
        };
        HtmlAdapter::new().render(&ctx).unwrap()
    }

    #[test]
    fn wraps_lines_in_overview_list() {
        let html = render();
        assert!(html.starts_with("<ul class=\"overview-list\">"));
        assert_eq!(html.matches("<li>").count() - html.matches("<li><").count(), 2);
        assert!(html.contains(r#"<li class="environment">Environment: <span class="identifier">staging</span></li>"#));
    }

    #[test]
    fn inline_list_is_part_of_the_sentence() {
        let html = render();
        assert!(html.contains(
            r#"Activated <span class="type">plugins</span> <span class="identifier">akismet</span> and <span class="identifier">jetpack</span> <span class="duplicates">(&times;2)</span>"#
        ));
    }

    #[test]
    fn truncated_block_has_show_more_link() {
        let html = render();
        assert!(html.contains(r#"<ul class="entities">"#));
        assert!(html.contains(
            r#"<a class="show-more" href="" data-list-key="post|||move||| to trash">show 2 more...</a>"#
        ));
    }

    #[test]
    fn escapes_entity_names() {
        let html = render();
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("A & B"));
    }
}
