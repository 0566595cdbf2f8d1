//! File I/O for metadata documents and generated output.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors while loading a `meta.json` or `content.json` document.
///
/// These are the only recoverable errors in an export run: the caller logs
/// the offending path and skips the subtree. Everything else (write and copy
/// failures) propagates and aborts the run.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and deserializes a JSON document.
///
/// # Errors
///
/// Returns `MetaError::Io` when the file cannot be read (missing note
/// directories land here) and `MetaError::Json` when it does not deserialize
/// into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MetaError> {
    let contents = std::fs::read_to_string(path).map_err(|source| MetaError::Io {
        path: path.into(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| MetaError::Json {
        path: path.into(),
        source,
    })
}

/// Writes an HTML document atomically, overwriting any existing file.
///
/// Uses a temporary file in the destination directory and an atomic rename,
/// so readers never observe a half-written page. The parent directory must
/// exist.
pub fn write_html(path: &Path, html: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no parent"))?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(html.as_bytes())?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Recursively copies a directory tree, overwriting conflicting files.
///
/// Directories are created as encountered; existing destination files that
/// also exist in the source are replaced, others are left alone.
pub fn copy_dir_all(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(io::Error::from)?;
        let target = dest.join(entry.path().strip_prefix(src).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
