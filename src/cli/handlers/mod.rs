//! Command handlers for the CLI.

mod completions;
mod export;

use std::path::Path;

use crate::export::ExportReporter;
use crate::infra::MetaError;

pub use completions::handle_completions;
pub use export::handle_export;

/// Reporter that prints export progress to the console.
///
/// Skip diagnostics always go to stderr, one line per skipped path; progress
/// lines only appear with `-v`.
pub(crate) struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ExportReporter for ConsoleReporter {
    fn on_notebook(&mut self, path: &Path) {
        if self.verbose {
            println!("  notebook: {}", path.display());
        }
    }

    fn on_note(&mut self, path: &Path) {
        if self.verbose {
            println!("  note: {}", path.display());
        }
    }

    fn on_skip(&mut self, path: &Path, error: &MetaError) {
        eprintln!("skipped {}: {}", path.display(), error);
    }
}
