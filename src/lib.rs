//! qvhtml - export Quiver libraries to static HTML

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_export},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Export(args) => handle_export(args, &config, verbose),
        Command::Completions(args) => handle_completions(args),
    }
}
