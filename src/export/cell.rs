//! Rendering of content cells into HTML fragments.

use regex::Regex;

use crate::domain::Cell;
use crate::export::escape::html_escape;
use crate::export::markdown::markdown_to_html;

/// Quiver's internal scheme for images attached to a note. Exported pages
/// reference the copied `resources` directory instead.
const IMAGE_URL_TOKEN: &str = r"(?i)quiver-image-url";

/// Renders cells into HTML fragments.
///
/// Text and latex data is inserted verbatim; Quiver wrote it and the export
/// trusts it as-is. Only code cells are escaped. Front-matter never passes
/// through here.
pub struct CellRenderer {
    image_url: Regex,
}

impl CellRenderer {
    pub fn new() -> Self {
        Self {
            image_url: Regex::new(IMAGE_URL_TOKEN).unwrap(),
        }
    }

    /// Renders one cell, or `None` for a kind this tool does not know.
    pub fn render(&self, cell: &Cell) -> Option<String> {
        match cell {
            Cell::Text { data } => Some(format!(
                "<div class='cell text-cell'>{}</div>",
                self.rewrite_image_urls(data)
            )),
            Cell::Code { data } => Some(format!(
                "<pre class='cell code-cell'><code>{}</code></pre>",
                html_escape(data)
            )),
            Cell::Markdown { data } => Some(format!(
                "<div class='cell markdown-cell'>{}</div>",
                markdown_to_html(&self.rewrite_image_urls(data))
            )),
            Cell::Latex { data } => Some(format!("<div class='cell latex-cell'>{data}</div>")),
            Cell::Unknown => None,
        }
    }

    /// Renders a note's cells in order, concatenated without separators.
    pub fn render_all(&self, cells: &[Cell]) -> String {
        cells.iter().filter_map(|cell| self.render(cell)).collect()
    }

    fn rewrite_image_urls(&self, data: &str) -> String {
        self.image_url.replace_all(data, "resources").into_owned()
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(data: &str) -> Cell {
        Cell::Text { data: data.into() }
    }

    // ===========================================
    // Individual cell kinds
    // ===========================================

    #[test]
    fn text_cell_wraps_data_verbatim() {
        let renderer = CellRenderer::new();
        let html = renderer.render(&text("<p>already html</p>")).unwrap();
        assert_eq!(html, "<div class='cell text-cell'><p>already html</p></div>");
    }

    #[test]
    fn text_cell_rewrites_image_urls() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&text(r#"<img src="quiver-image-url/abc.png">"#))
            .unwrap();
        assert!(html.contains(r#"<img src="resources/abc.png">"#));
    }

    #[test]
    fn image_url_rewrite_is_case_insensitive() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&text("QUIVER-IMAGE-URL/a.png Quiver-Image-Url/b.png"))
            .unwrap();
        assert!(html.contains("resources/a.png"));
        assert!(html.contains("resources/b.png"));
        assert!(!html.to_lowercase().contains("quiver-image-url"));
    }

    #[test]
    fn code_cell_escapes_markup() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&Cell::Code {
                data: r#"<b>"x"</b>"#.into(),
            })
            .unwrap();
        assert_eq!(
            html,
            "<pre class='cell code-cell'><code>&lt;b&gt;&quot;x&quot;&lt;/b&gt;</code></pre>"
        );
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn markdown_cell_renders_markdown() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&Cell::Markdown {
                data: "# Hello".into(),
            })
            .unwrap();
        assert!(html.starts_with("<div class='cell markdown-cell'>"));
        assert!(html.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn markdown_cell_rewrites_image_urls_before_rendering() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&Cell::Markdown {
                data: "![x](quiver-image-url/pic.png)".into(),
            })
            .unwrap();
        assert!(html.contains(r#"src="resources/pic.png""#));
    }

    #[test]
    fn latex_cell_passes_data_through_unescaped() {
        let renderer = CellRenderer::new();
        let html = renderer
            .render(&Cell::Latex {
                data: r"$$x < y$$".into(),
            })
            .unwrap();
        assert_eq!(html, r"<div class='cell latex-cell'>$$x < y$$</div>");
    }

    #[test]
    fn unknown_cell_renders_nothing() {
        let renderer = CellRenderer::new();
        assert_eq!(renderer.render(&Cell::Unknown), None);
    }

    // ===========================================
    // render_all
    // ===========================================

    #[test]
    fn render_all_concatenates_in_order() {
        let renderer = CellRenderer::new();
        let html = renderer.render_all(&[
            Cell::Markdown { data: "first".into() },
            text("second"),
        ]);
        assert_eq!(
            html,
            "<div class='cell markdown-cell'><p>first</p>\n</div><div class='cell text-cell'>second</div>"
        );
    }

    #[test]
    fn render_all_skips_unknown_cells() {
        let renderer = CellRenderer::new();
        let html = renderer.render_all(&[text("a"), Cell::Unknown, text("b")]);
        assert_eq!(
            html,
            "<div class='cell text-cell'>a</div><div class='cell text-cell'>b</div>"
        );
    }

    #[test]
    fn render_all_of_empty_slice_is_empty() {
        let renderer = CellRenderer::new();
        assert_eq!(renderer.render_all(&[]), "");
    }
}
