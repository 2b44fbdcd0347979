//! Navigation tree construction and validation.
//!
//! A single depth-first, pre-order pass converts [`NavNodeSpec`] values into
//! [`NavNode`] values. The current position is tracked in one [`NodePath`]
//! stack, so auxiliary space is proportional to the tree depth. The first
//! violation aborts the build.

use crate::error::{ValidationError, ValidationErrorKind};
use crate::navigation::NavigationConfig;
use crate::node::{GroupNode, LinkNode, NavNode, NavNodeSpec};
use crate::path::{NodePath, PathSegment};

/// Validate a title and sidebar declaration and produce a [`NavigationConfig`].
///
/// Order and nesting are kept exactly as authored. Link targets are checked
/// for shape only; whether they resolve to real pages is left to the renderer.
///
/// # Errors
///
/// Returns [`ValidationError`] with kind [`ValidationErrorKind::EmptyLabel`]
/// when the title or any entry label is empty, or
/// [`ValidationErrorKind::InvalidLink`] when a link target is empty or does
/// not start with `/`.
///
/// # Example
///
/// ```
/// use sitenav_tree::{NavNodeSpec, build};
///
/// let nav = build(
///     "Docs",
///     vec![
///         NavNodeSpec::link("Intro", "/getting-started"),
///         NavNodeSpec::group("Guides", vec![NavNodeSpec::link("Setup", "/Guides/Settings")])
///             .collapsed(true),
///     ],
/// )?;
///
/// assert_eq!(nav.sidebar().len(), 2);
/// # Ok::<(), sitenav_tree::ValidationError>(())
/// ```
pub fn build(
    title: impl Into<String>,
    sidebar: Vec<NavNodeSpec>,
) -> Result<NavigationConfig, ValidationError> {
    let title = title.into();
    if title.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyLabel,
            NodePath::title(),
        ));
    }

    let mut path = NodePath::root();
    path.push(PathSegment::Field("sidebar"));
    let sidebar = build_items(sidebar, &mut path)?;

    let config = NavigationConfig::new(title, sidebar);
    tracing::debug!(
        title = %config.title(),
        node_count = config.node_count(),
        depth = config.depth(),
        "Navigation built"
    );
    Ok(config)
}

/// Build a sequence of entries. `path` points at the sequence itself.
fn build_items(
    specs: Vec<NavNodeSpec>,
    path: &mut NodePath,
) -> Result<Vec<NavNode>, ValidationError> {
    let mut nodes = Vec::with_capacity(specs.len());
    for (index, spec) in specs.into_iter().enumerate() {
        path.push(PathSegment::Index(index));
        nodes.push(build_node(spec, path)?);
        path.pop();
    }
    Ok(nodes)
}

/// Build one entry. `path` points at the entry.
fn build_node(spec: NavNodeSpec, path: &mut NodePath) -> Result<NavNode, ValidationError> {
    if spec.text().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyLabel,
            path.clone(),
        ));
    }

    match spec {
        NavNodeSpec::Link { text, link } => {
            if !is_valid_link(&link) {
                return Err(ValidationError::new(
                    ValidationErrorKind::InvalidLink,
                    path.clone(),
                ));
            }
            Ok(NavNode::Link(LinkNode::new(text, link)))
        }
        NavNodeSpec::Group {
            text,
            collapsed,
            items,
        } => {
            path.push(PathSegment::Field("items"));
            let items = build_items(items, path)?;
            path.pop();
            Ok(NavNode::Group(GroupNode::new(
                text,
                collapsed.unwrap_or(false),
                items,
            )))
        }
    }
}

fn is_valid_link(link: &str) -> bool {
    link.starts_with('/')
}
