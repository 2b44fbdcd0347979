//! `sitenav check` command implementation.

use clap::Args;
use sitenav_tree::NavigationConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load()?;

        output.info(&format!("Config: {}", config.config_path.display()));
        output.success(&summary(&config.navigation));
        for warning in duplicate_warnings(&config.navigation) {
            output.warning(&warning);
        }

        Ok(())
    }
}

/// One-line description of a valid navigation tree.
fn summary(nav: &NavigationConfig) -> String {
    format!(
        "Navigation \"{}\" is valid: {} entries, {} links, depth {}",
        nav.title(),
        nav.node_count(),
        nav.links().count(),
        nav.depth()
    )
}

/// Warnings for link targets listed more than once.
fn duplicate_warnings(nav: &NavigationConfig) -> Vec<String> {
    nav.duplicate_links()
        .into_iter()
        .map(|target| format!("Warning: {target} is linked more than once"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitenav_tree::{NavNodeSpec, build};

    #[test]
    fn test_summary() {
        let nav = build(
            "Docs",
            vec![
                NavNodeSpec::link("Intro", "/intro"),
                NavNodeSpec::group("Guides", vec![NavNodeSpec::link("Setup", "/setup")]),
            ],
        )
        .unwrap();

        assert_eq!(
            summary(&nav),
            "Navigation \"Docs\" is valid: 3 entries, 2 links, depth 2"
        );
    }

    #[test]
    fn test_duplicate_warnings() {
        let nav = build(
            "Docs",
            vec![
                NavNodeSpec::link("Intro", "/intro"),
                NavNodeSpec::link("Start here", "/intro"),
            ],
        )
        .unwrap();

        assert_eq!(
            duplicate_warnings(&nav),
            vec!["Warning: /intro is linked more than once".to_owned()]
        );
    }
}
