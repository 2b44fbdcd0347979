//! Navigation tree model for sitenav.
//!
//! This crate provides:
//! - [`NavNodeSpec`]: unchecked sidebar entries as an author declares them
//! - [`build`]: depth-first validation producing a [`NavigationConfig`]
//! - [`NavNode`]: read-only link and group entries handed to a renderer
//!
//! # Quick Start
//!
//! ```
//! use sitenav_tree::{NavNodeSpec, ValidationErrorKind, build};
//!
//! let nav = build(
//!     "Tact-By-Building",
//!     vec![
//!         NavNodeSpec::link("Introduction", "/getting-started"),
//!         NavNodeSpec::group(
//!             "Guides",
//!             vec![NavNodeSpec::link("Setting Up the Environment", "/Guides/Settings")],
//!         )
//!         .collapsed(true),
//!     ],
//! )?;
//! assert_eq!(nav.node_count(), 3);
//!
//! let err = build("Docs", vec![NavNodeSpec::link("Bad", "no-leading-slash")]).unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::InvalidLink);
//! assert_eq!(err.path().to_string(), "sidebar[0]");
//! # Ok::<(), sitenav_tree::ValidationError>(())
//! ```

mod build;
mod error;
mod navigation;
mod node;
mod path;

pub use build::build;
pub use error::{ValidationError, ValidationErrorKind};
pub use navigation::{Links, NavigationConfig};
pub use node::{GroupNode, LinkNode, NavNode, NavNodeSpec};
pub use path::{NodePath, PathSegment};
