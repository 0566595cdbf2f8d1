//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default output directory for exports
    pub output: Option<PathBuf>,

    /// Default custom template file
    pub template: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/qvhtml/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("qvhtml")
            .join("config.toml")
    }

    /// Resolve the output directory, with the CLI argument taking precedence.
    ///
    /// `None` means the exporter's own default (the current directory).
    pub fn output_dir(&self, cli_output: Option<&PathBuf>) -> Option<PathBuf> {
        cli_output.cloned().or_else(|| self.output.clone())
    }

    /// Resolve the template file, with the CLI argument taking precedence.
    pub fn template_file(&self, cli_template: Option<&PathBuf>) -> Option<PathBuf> {
        cli_template.cloned().or_else(|| self.template.clone())
    }
}
