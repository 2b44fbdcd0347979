//! Raw sidebar entries as parsed from TOML.
//!
//! TOML has no tagged unions, so each entry is read as one flat table and
//! classified afterwards: `items` makes a group, `link` makes a link.

use serde::Deserialize;
use sitenav_tree::{NavNodeSpec, NodePath};

use crate::ConfigError;

/// One `[[sidebar]]` or `[[...items]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SidebarEntryRaw {
    /// Missing labels are reported by the tree builder with a node path.
    #[serde(default)]
    text: String,
    link: Option<String>,
    collapsed: Option<bool>,
    items: Option<Vec<SidebarEntryRaw>>,
}

impl SidebarEntryRaw {
    /// Convert into a tree entry, rejecting ambiguous tables.
    fn into_spec(self, path: &NodePath) -> Result<NavNodeSpec, ConfigError> {
        match (self.link, self.items) {
            (Some(link), None) => {
                if self.collapsed.is_some() {
                    return Err(ConfigError::Validation(format!(
                        "{path}: collapsed is only allowed on entries with items"
                    )));
                }
                Ok(NavNodeSpec::link(self.text, link))
            }
            (None, Some(items)) => {
                let items = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| item.into_spec(&path.item(index)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(NavNodeSpec::Group {
                    text: self.text,
                    collapsed: self.collapsed,
                    items,
                })
            }
            (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
                "{path}: entry cannot have both link and items"
            ))),
            (None, None) => Err(ConfigError::Validation(format!(
                "{path}: entry requires either link or items"
            ))),
        }
    }
}

/// Convert the top-level `sidebar` array.
pub(crate) fn into_specs(
    entries: Vec<SidebarEntryRaw>,
) -> Result<Vec<NavNodeSpec>, ConfigError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_spec(&NodePath::sidebar(index)))
        .collect()
}
