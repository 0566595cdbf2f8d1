//! The export pipeline: walk a Quiver directory tree, render each note,
//! write the mirrored HTML tree.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::domain::{LibraryMeta, NoteContent, NoteMeta, NotebookMeta, PathKind};
use crate::export::cell::CellRenderer;
use crate::export::template::NoteTemplate;
use crate::infra::{MetaError, copy_dir_all, note_dir_name, read_json, sanitize_component, write_html};

/// Counters accumulated over one export run.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ExportStats {
    /// Notebooks whose output directory was produced.
    pub notebooks: usize,
    /// Notes written as `index.html`.
    pub notes: usize,
    /// Subtrees skipped because their metadata failed to load.
    pub skipped: usize,
}

/// Observer for export progress and skip diagnostics.
///
/// The exporter itself never prints; every observable line goes through this
/// trait so the skip branch stays visible in tests.
pub trait ExportReporter {
    /// A notebook is about to be exported.
    fn on_notebook(&mut self, path: &Path);

    /// A note was rendered and written.
    fn on_note(&mut self, path: &Path);

    /// A subtree was skipped because its metadata or content failed to load.
    fn on_skip(&mut self, path: &Path, error: &MetaError);
}

/// Exports Quiver libraries, notebooks, and notes to static HTML.
///
/// The traversal is synchronous and depth-first: a library finishes each
/// notebook before the next, a notebook finishes each note before the next.
/// Metadata failures skip the subtree; write and copy failures abort the run.
pub struct Exporter {
    template: NoteTemplate,
    cells: CellRenderer,
}

impl Exporter {
    pub fn new(template: NoteTemplate) -> Self {
        Self {
            template,
            cells: CellRenderer::new(),
        }
    }

    /// Exports whatever `path` points at.
    ///
    /// The path is resolved to an absolute path first; `output_dir` defaults
    /// to the current working directory. Paths with an unrecognized suffix
    /// export nothing and report zero counts.
    pub fn export(
        &self,
        path: &Path,
        output_dir: Option<&Path>,
        reporter: &mut dyn ExportReporter,
    ) -> Result<ExportStats> {
        let dir = std::path::absolute(path)?;
        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };

        let mut stats = ExportStats::default();
        self.dispatch(&dir, &output_dir, reporter, &mut stats)?;
        Ok(stats)
    }

    fn dispatch(
        &self,
        dir: &Path,
        output_dir: &Path,
        reporter: &mut dyn ExportReporter,
        stats: &mut ExportStats,
    ) -> Result<()> {
        match PathKind::classify(dir) {
            PathKind::Library => self.export_library(dir, output_dir, reporter, stats),
            PathKind::Notebook => self.export_notebook(dir, output_dir, reporter, stats),
            PathKind::Note => self.export_note(dir, output_dir, reporter, stats),
            // Anything else is not part of a Quiver export.
            PathKind::Unrecognized => Ok(()),
        }
    }

    fn export_library(
        &self,
        dir: &Path,
        output_dir: &Path,
        reporter: &mut dyn ExportReporter,
        stats: &mut ExportStats,
    ) -> Result<()> {
        let meta: LibraryMeta = match read_json(&dir.join("meta.json")) {
            Ok(meta) => meta,
            Err(err) => {
                reporter.on_skip(dir, &err);
                stats.skipped += 1;
                return Ok(());
            }
        };

        for child in &meta.children {
            let notebook_dir = dir.join(format!("{}.qvnotebook", child.uuid));
            self.dispatch(&notebook_dir, output_dir, reporter, stats)?;
        }
        Ok(())
    }

    fn export_notebook(
        &self,
        dir: &Path,
        output_dir: &Path,
        reporter: &mut dyn ExportReporter,
        stats: &mut ExportStats,
    ) -> Result<()> {
        let meta: NotebookMeta = match read_json(&dir.join("meta.json")) {
            Ok(meta) => meta,
            Err(err) => {
                reporter.on_skip(dir, &err);
                stats.skipped += 1;
                return Ok(());
            }
        };

        reporter.on_notebook(dir);
        let notebook_out = output_dir.join(sanitize_component(meta.display_name()));
        if !notebook_out.exists() {
            std::fs::create_dir_all(&notebook_out)?;
        }
        stats.notebooks += 1;

        // Sorted for deterministic traversal; entry order is irrelevant to
        // the output tree itself.
        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        for entry in entries {
            if PathKind::classify(&entry) == PathKind::Note {
                self.export_note(&entry, &notebook_out, reporter, stats)?;
            }
        }
        Ok(())
    }

    fn export_note(
        &self,
        dir: &Path,
        output_dir: &Path,
        reporter: &mut dyn ExportReporter,
        stats: &mut ExportStats,
    ) -> Result<()> {
        let loaded = read_json::<NoteMeta>(&dir.join("meta.json")).and_then(|meta| {
            let content: NoteContent = read_json(&dir.join("content.json"))?;
            Ok((meta, content))
        });
        let (meta, content) = match loaded {
            Ok(pair) => pair,
            Err(err) => {
                reporter.on_skip(dir, &err);
                stats.skipped += 1;
                return Ok(());
            }
        };

        let body = self.cells.render_all(&content.cells);
        let html = self.template.compose(&meta, &body);

        let note_out = output_dir.join(note_dir_name(&meta));
        if !note_out.exists() {
            std::fs::create_dir_all(&note_out)?;
        }
        write_html(&note_out.join("index.html"), &html)?;

        let resources = dir.join("resources");
        if resources.exists() {
            copy_dir_all(&resources, &note_out.join("resources"))?;
        }

        reporter.on_note(dir);
        stats.notes += 1;
        Ok(())
    }
}
