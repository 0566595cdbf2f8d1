//! Handler for the `export` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::ExportArgs;
use crate::export::{ExportStats, Exporter, NoteTemplate};

use super::ConsoleReporter;

/// Result of an export run.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Notebooks exported
    pub notebooks: usize,
    /// Notes written
    pub notes: usize,
    /// Subtrees skipped over bad metadata
    pub skipped: usize,
    /// Output directory
    pub path: String,
}

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, config: &Config, verbose: bool) -> Result<()> {
    let template = match config.template_file(args.template.as_ref()) {
        Some(path) => NoteTemplate::from_file(&path)?,
        None => NoteTemplate::default(),
    };

    let output_dir = config.output_dir(args.output.as_ref());
    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    let exporter = Exporter::new(template);
    let mut reporter = ConsoleReporter::new(verbose);
    let stats = exporter.export(&args.path, output_dir.as_deref(), &mut reporter)?;

    let display_dir = match &output_dir {
        Some(dir) => dir.display().to_string(),
        None => std::env::current_dir()?.display().to_string(),
    };
    print_result(&args.format, stats, &display_dir);
    Ok(())
}

/// Print the result in the requested format.
fn print_result(format: &OutputFormat, stats: ExportStats, output_dir: &str) {
    match format {
        OutputFormat::Human => {
            let mut line = format!(
                "Exported {} notes from {} notebooks to {}",
                stats.notes, stats.notebooks, output_dir
            );
            if stats.skipped > 0 {
                line.push_str(&format!(" ({} skipped)", stats.skipped));
            }
            println!("{}", line);
        }
        OutputFormat::Json => {
            let result = ExportResult {
                notebooks: stats.notebooks,
                notes: stats.notes,
                skipped: stats.skipped,
                path: output_dir.to_string(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&Output::new(result)).unwrap()
            );
        }
        OutputFormat::Paths => {
            println!("{}", output_dir);
        }
    }
}
