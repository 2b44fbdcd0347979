//! `sitenav export` command implementation.

use clap::Args;
use sitenav_tree::NavigationConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or stdout is closed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.data(&self.render()?)?;
        Ok(())
    }

    /// Load the configuration and serialize it.
    fn render(self) -> Result<String, CliError> {
        let compact = self.compact;
        let config = self.source.load()?;
        tracing::debug!(path = %config.config_path.display(), compact, "Exporting navigation");

        to_json(&config.navigation, compact)
    }
}

/// Serialize the navigation in the renderer's `{ title, sidebar }` shape.
fn to_json(nav: &NavigationConfig, compact: bool) -> Result<String, CliError> {
    let json = if compact {
        serde_json::to_string(nav)?
    } else {
        serde_json::to_string_pretty(nav)?
    };
    Ok(json)
}
