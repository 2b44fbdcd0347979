//! Navigation configuration loading for sitenav.
//!
//! Parses `nav.toml` files with serde, validates them into a
//! [`NavigationConfig`], and provides auto-discovery of the file in parent
//! directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## File Format
//!
//! ```toml
//! title = "Tact-By-Building"
//!
//! [[sidebar]]
//! text = "Introduction"
//! link = "/getting-started"
//!
//! [[sidebar]]
//! text = "Guides"
//! collapsed = true
//!
//! [[sidebar.items]]
//! text = "Setting Up the Environment"
//! link = "/Guides/Settings"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! The `title` value supports `${VAR}` (errors if unset) and
//! `${VAR:-default}`.

mod expand;
mod sidebar;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_tree::{NavigationConfig, ValidationError, build};

use crate::sidebar::SidebarEntryRaw;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "nav.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRaw {
    #[serde(default)]
    title: String,
    #[serde(default)]
    sidebar: Vec<SidebarEntryRaw>,
}

/// Loaded and validated navigation configuration.
#[derive(Debug)]
pub struct Config {
    /// Validated navigation tree.
    pub navigation: NavigationConfig,
    /// Path to the config file.
    pub config_path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Entry that cannot be classified as a link or a group.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "title").
        field: String,
        /// Error message (e.g., "${`SITE_NAME`} not set").
        message: String,
    },
    /// Navigation tree rejected by the builder.
    #[error(transparent)]
    Navigation(#[from] ValidationError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `nav.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or any parse,
    /// expansion or validation error.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => {
                let cwd = std::env::current_dir()?;
                discover_config(&cwd)
                    .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
            }
        };

        Self::load_from_file(&path, cli_settings)
    }

    /// Load configuration from a specific file.
    fn load_from_file(
        path: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let navigation = parse_navigation(&content, cli_settings)?;
        tracing::info!(
            path = %path.display(),
            node_count = navigation.node_count(),
            "Loaded navigation config"
        );

        Ok(Self {
            navigation,
            config_path: path.to_path_buf(),
        })
    }
}

/// Parse and validate a navigation declaration without touching the filesystem.
///
/// # Errors
///
/// Returns parse, expansion, classification or tree validation errors.
pub fn parse_navigation(
    content: &str,
    cli_settings: Option<&CliSettings>,
) -> Result<NavigationConfig, ConfigError> {
    let raw: ConfigRaw = toml::from_str(content)?;

    let mut title = expand::expand_env(&raw.title, "title")?;
    if let Some(settings) = cli_settings
        && let Some(override_title) = &settings.title
    {
        title.clone_from(override_title);
    }

    let sidebar = sidebar::into_specs(raw.sidebar)?;
    Ok(build(title, sidebar)?)
}

/// Search for config file in `start` and its parents.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered navigation config");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
