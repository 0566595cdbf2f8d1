//! Metadata documents read from `meta.json` files.
//!
//! Each of the three directory kinds carries its own `meta.json`. Parsing is
//! best-effort: optional fields default rather than fail, so only structurally
//! broken documents are rejected.

use serde::Deserialize;

/// Metadata of a `.qvlibrary` directory.
///
/// A library only lists its child notebooks by identifier; the notebook
/// directories themselves sit next to the library's `meta.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryMeta {
    /// Child notebook references. Absent means an empty library.
    #[serde(default)]
    pub children: Vec<NotebookRef>,
}

/// A reference to a notebook from a library's child list.
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookRef {
    pub uuid: String,
}

/// Metadata of a `.qvnotebook` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookMeta {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl NotebookMeta {
    /// The notebook's human-readable name, falling back to its identifier
    /// when no (non-empty) name is present.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.uuid)
    }
}

/// Metadata of a `.qvnote` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    pub uuid: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NoteMeta {
    /// The note's title, falling back to its identifier when the title is
    /// missing or empty.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.uuid)
    }
}
