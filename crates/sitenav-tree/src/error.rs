//! Validation error types.

use std::fmt;

use crate::path::NodePath;

/// Structural rule violated by a navigation node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Node label (or site title) is empty.
    EmptyLabel,
    /// Link target is empty or does not start with `/`.
    InvalidLink,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => f.write_str("text cannot be empty"),
            Self::InvalidLink => f.write_str("link must be non-empty and start with '/'"),
        }
    }
}

/// First invariant violation found while building a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid navigation entry at {path}: {kind}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    path: NodePath,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, path: NodePath) -> Self {
        Self { kind, path }
    }

    /// Violated rule.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Location of the offending node.
    #[must_use]
    pub fn path(&self) -> &NodePath {
        &self.path
    }
}
