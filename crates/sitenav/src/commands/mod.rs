//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;

/// Arguments shared by commands that load a navigation config.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover nav.toml).
    #[arg(short, long, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load and validate the configuration.
    pub(crate) fn load(self) -> Result<Config, CliError> {
        let cli_settings = CliSettings { title: self.title };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
