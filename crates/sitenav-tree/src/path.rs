//! Positional addresses of nodes inside a navigation tree.
//!
//! A [`NodePath`] is rendered the way an author would point at an entry in
//! the declaration: `sidebar[2].items[1]`.

use std::fmt;

/// One step of a [`NodePath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named field (`sidebar`, `items`, `title`).
    Field(&'static str),
    /// Position within a sequence.
    Index(usize),
}

/// Location of a node relative to the configuration root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Empty path (the configuration root).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path pointing at the site title.
    #[must_use]
    pub fn title() -> Self {
        Self {
            segments: vec![PathSegment::Field("title")],
        }
    }

    /// Path of the top-level sidebar entry at `index`.
    #[must_use]
    pub fn sidebar(index: usize) -> Self {
        Self {
            segments: vec![PathSegment::Field("sidebar"), PathSegment::Index(index)],
        }
    }

    /// Path of the child at `index` inside this group's items.
    #[must_use]
    pub fn item(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(PathSegment::Field("items"));
        path.push(PathSegment::Index(index));
        path
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// Segments from the root to the node.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}
