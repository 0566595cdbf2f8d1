//! Path classification for the three Quiver directory kinds.

use std::path::Path;

/// The kind of Quiver directory a path refers to, determined by its
/// filename suffix.
///
/// Classification happens once per path; everything downstream matches
/// exhaustively on the result, so an unrecognized suffix is an explicit
/// variant rather than a silent fallthrough.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use qvhtml::domain::PathKind;
///
/// assert_eq!(PathKind::classify(Path::new("/tmp/My.qvlibrary")), PathKind::Library);
/// assert_eq!(PathKind::classify(Path::new("notes.txt")), PathKind::Unrecognized);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A `.qvlibrary` directory grouping notebooks.
    Library,
    /// A `.qvnotebook` directory grouping notes.
    Notebook,
    /// A `.qvnote` directory holding one note.
    Note,
    /// Any other suffix. Ignored by the exporter.
    Unrecognized,
}

impl PathKind {
    /// Classifies a path by its filename suffix.
    pub fn classify(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("qvlibrary") => PathKind::Library,
            Some("qvnotebook") => PathKind::Notebook,
            Some("qvnote") => PathKind::Note,
            _ => PathKind::Unrecognized,
        }
    }
}
