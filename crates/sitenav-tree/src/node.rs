//! Navigation node types.
//!
//! [`NavNodeSpec`] is the unchecked description an author writes;
//! [`NavNode`] is the validated, read-only node produced by
//! [`build`](crate::build).

use serde::Serialize;

/// Unvalidated description of a sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNodeSpec {
    /// Clickable entry pointing at a page.
    Link {
        /// Display label.
        text: String,
        /// Target path, e.g. `/Guides/Basics`.
        link: String,
    },
    /// Labeled section grouping further entries.
    Group {
        /// Section label.
        text: String,
        /// Initial collapsed state (`None` means expanded).
        collapsed: Option<bool>,
        /// Child entries in render order.
        items: Vec<NavNodeSpec>,
    },
}

impl NavNodeSpec {
    /// Describe a link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Describe an expanded group entry.
    pub fn group(text: impl Into<String>, items: Vec<NavNodeSpec>) -> Self {
        Self::Group {
            text: text.into(),
            collapsed: None,
            items,
        }
    }

    /// Set the initial collapsed state.
    ///
    /// Links have no collapsed state, so on a link this returns the entry
    /// unchanged. The `nav.toml` loader is stricter and rejects `collapsed`
    /// on a link table.
    #[must_use]
    pub fn collapsed(self, collapsed: bool) -> Self {
        match self {
            Self::Group { text, items, .. } => Self::Group {
                text,
                collapsed: Some(collapsed),
                items,
            },
            link @ Self::Link { .. } => link,
        }
    }

    /// Display label of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }
}

/// Validated leaf entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkNode {
    text: String,
    link: String,
}

impl LinkNode {
    pub(crate) fn new(text: String, link: String) -> Self {
        Self { text, link }
    }

    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target path (always starts with `/`).
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Validated section entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    text: String,
    collapsed: bool,
    items: Vec<NavNode>,
}

impl GroupNode {
    pub(crate) fn new(text: String, collapsed: bool, items: Vec<NavNode>) -> Self {
        Self {
            text,
            collapsed,
            items,
        }
    }

    /// Section label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the group renders collapsed initially.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Child entries in render order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }
}

/// Validated sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Leaf link.
    Link(LinkNode),
    /// Nested group.
    Group(GroupNode),
}

impl NavNode {
    /// Display label of the entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => link.text(),
            Self::Group(group) => group.text(),
        }
    }

    /// Link target, if this is a link entry.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(link.link()),
            Self::Group(_) => None,
        }
    }

    /// Children of a group; empty for links.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        match self {
            Self::Link(_) => &[],
            Self::Group(group) => group.items(),
        }
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.items().iter().map(NavNode::node_count).sum::<usize>()
    }

    /// Nesting depth of this subtree (1 for a leaf or an empty group).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.items().iter().map(NavNode::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spec_group_defaults_to_expanded() {
        let spec = NavNodeSpec::group("Guides", Vec::new());

        assert_eq!(
            spec,
            NavNodeSpec::Group {
                text: "Guides".to_owned(),
                collapsed: None,
                items: Vec::new(),
            }
        );
    }

    #[test]
    fn test_spec_collapsed_sets_group_state() {
        let spec = NavNodeSpec::group("Guides", Vec::new()).collapsed(true);

        assert!(matches!(
            spec,
            NavNodeSpec::Group {
                collapsed: Some(true),
                ..
            }
        ));
    }

    #[test]
    fn test_spec_collapsed_ignored_on_link() {
        let spec = NavNodeSpec::link("Intro", "/intro").collapsed(true);

        assert_eq!(spec, NavNodeSpec::link("Intro", "/intro"));
    }

    #[test]
    fn test_spec_text_for_both_variants() {
        assert_eq!(NavNodeSpec::link("Intro", "/intro").text(), "Intro");
        assert_eq!(NavNodeSpec::group("Guides", Vec::new()).text(), "Guides");
    }

    #[test]
    fn test_node_count_and_depth() {
        let node = NavNode::Group(GroupNode::new(
            "A".to_owned(),
            false,
            vec![
                NavNode::Link(LinkNode::new("B".to_owned(), "/b".to_owned())),
                NavNode::Group(GroupNode::new(
                    "C".to_owned(),
                    false,
                    vec![NavNode::Link(LinkNode::new("D".to_owned(), "/d".to_owned()))],
                )),
            ],
        ));

        assert_eq!(node.node_count(), 4);
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn test_empty_group_depth_is_one() {
        let node = NavNode::Group(GroupNode::new("Empty".to_owned(), true, Vec::new()));

        assert_eq!(node.depth(), 1);
        assert_eq!(node.node_count(), 1);
        assert!(node.link().is_none());
    }

    #[test]
    fn test_link_serialization() {
        let node = NavNode::Link(LinkNode::new("Intro".to_owned(), "/intro".to_owned()));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, serde_json::json!({"text": "Intro", "link": "/intro"}));
    }

    #[test]
    fn test_group_serialization_keeps_empty_items() {
        let node = NavNode::Group(GroupNode::new("Empty".to_owned(), false, Vec::new()));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"text": "Empty", "collapsed": false, "items": []})
        );
    }
}
