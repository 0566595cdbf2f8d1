//! HTML page template and placeholder substitution.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::NoteMeta;

/// Default page template.
///
/// Carries the seven placeholders the compositor substitutes: `{{title}}`,
/// `{{content}}`, and the five front-matter fields. Latex cells are rendered
/// client-side, so the page loads MathJax.
pub const DEFAULT_NOTE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{title}}</title>
    <style>
        body { max-width: 46rem; margin: 2rem auto; padding: 0 1rem; font-family: system-ui, sans-serif; line-height: 1.6; }
        header { border-bottom: 1px solid #ddd; margin-bottom: 1.5rem; }
        .front-matter { color: #666; font-size: 0.85rem; }
        .front-matter dt { font-weight: 600; float: left; clear: left; margin-right: 0.5rem; }
        .cell { margin: 1rem 0; }
        .code-cell { background: #f6f8fa; padding: 0.75rem; overflow-x: auto; border-radius: 4px; }
        img { max-width: 100%; }
    </style>
    <script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js" async></script>
</head>
<body>
    <article>
        <header>
            <h1>{{fm-title}}</h1>
            <dl class="front-matter">
                <dt>Created</dt><dd>{{fm-created-at}}</dd>
                <dt>Updated</dt><dd>{{fm-updated-at}}</dd>
                <dt>UUID</dt><dd>{{fm-uuid}}</dd>
                <dt>Tags</dt><dd>{{fm-tags}}</dd>
            </dl>
        </header>
        <main>{{content}}</main>
    </article>
</body>
</html>"##;

/// The page template for one export run.
///
/// Holds the template text as an explicit value so a custom template is
/// loaded once and threaded through the run, never read ambiently.
///
/// Substitution is literal: each placeholder is replaced at most once, in a
/// fixed order, and values go in verbatim. Front-matter fields are NOT
/// HTML-escaped; a template author who surfaces them inside attributes has
/// to account for that.
pub struct NoteTemplate {
    source: String,
}

impl NoteTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Loads a custom template file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template file: {}", path.display()))?;
        Ok(Self::new(source))
    }

    /// Fills the template with a note's metadata and rendered content.
    ///
    /// Replacement order: title, content, then the five front-matter fields.
    /// A placeholder missing from the template is skipped without complaint;
    /// one occurring twice is replaced only the first time.
    pub fn compose(&self, meta: &NoteMeta, content: &str) -> String {
        let title = meta.display_title();
        self.source
            .replacen("{{title}}", title, 1)
            .replacen("{{content}}", content, 1)
            .replacen("{{fm-title}}", title, 1)
            .replacen("{{fm-created-at}}", &meta.created_at.to_string(), 1)
            .replacen("{{fm-updated-at}}", &meta.updated_at.to_string(), 1)
            .replacen("{{fm-uuid}}", &meta.uuid, 1)
            .replacen("{{fm-tags}}", &meta.tags.join(","), 1)
    }
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_NOTE_TEMPLATE)
    }
}
