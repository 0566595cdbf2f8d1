//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Converts markdown text to an HTML fragment.
///
/// Runs with the common extensions enabled (tables, footnotes,
/// strikethrough, task lists). Raw HTML embedded in the markdown passes
/// through untouched, which matches how Quiver notes mix the two.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
