//! Markdown rendering for content panels.
//!
//! Thin wrapper around `tui-markdown`: converts a page's markdown source
//! to owned, styled ratatui `Line`s that the surface stores as a panel
//! body.

use ratatui::text::{Line, Span};

use crate::viewer::tabs::MarkupRenderer;

/// Parse markdown text and return owned styled lines.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let rendered = tui_markdown::from_str(text);
    rendered
        .lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), span.style))
                .collect();
            Line::from(spans).style(line.style)
        })
        .collect()
}

/// The production `MarkupRenderer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> Vec<Line<'static>> {
        render_markdown(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn render_heading_and_list() {
        let md = "# Projects\n\n## Chicago Streets\n\n- Black and white\n- Human moments";
        let text = flat(&render_markdown(md));
        assert!(text.contains("Projects"));
        assert!(text.contains("Chicago Streets"));
        assert!(text.contains("Black and white"));
        assert!(text.contains("Human moments"));
    }

    #[test]
    fn render_link_keeps_label() {
        let md = "Check out my [Substack](https://example.com) for writing.";
        let text = flat(&render_markdown(md));
        assert!(text.contains("Substack"));
        assert!(text.contains("for writing"));
    }

    #[test]
    fn renderer_trait_matches_function() {
        let md = "# Tools\n- Lenses";
        let via_trait = MarkdownRenderer.render(md);
        assert_eq!(flat(&via_trait), flat(&render_markdown(md)));
    }

    #[test]
    fn render_empty() {
        let lines = render_markdown("");
        assert!(lines.len() <= 1);
    }
}
