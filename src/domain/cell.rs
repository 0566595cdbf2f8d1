//! Note content cells.

use serde::Deserialize;

/// One unit of note content, tagged by kind.
///
/// The kind decides the rendering rule; see `export::CellRenderer`. Cell data
/// is carried verbatim. A tag this tool does not know about deserializes into
/// [`Cell::Unknown`] so a single odd cell never invalidates the whole note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    /// Raw HTML, trusted as-is.
    Text { data: String },
    /// Source code, escaped before rendering.
    Code { data: String },
    /// Markdown source.
    Markdown { data: String },
    /// LaTeX source, rendered client-side.
    Latex { data: String },
    /// Any cell kind this tool does not recognize.
    #[serde(other)]
    Unknown,
}

/// The ordered cell sequence of a note's `content.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteContent {
    pub cells: Vec<Cell>,
}
