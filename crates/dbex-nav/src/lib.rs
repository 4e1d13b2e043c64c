//! Navigation tree resolution for the dbExpression documentation site.
//!
//! This crate provides:
//! - [`NavNode`]: the authored navigation tree
//! - [`NavTree`]: the flattened tree with breadcrumbs, previous/next lookup
//!   and current page resolution
//! - [`NavigationFile`]: TOML loading of navigation groups
//!
//! # Quick Start
//!
//! ```
//! use dbex_nav::{NavNode, NavTree};
//!
//! let forest = vec![NavNode::group(
//!     "A",
//!     vec![NavNode::link("A1", "/a1"), NavNode::link("A2", "/a2")],
//! )];
//! let tree = NavTree::flatten(&forest);
//!
//! let links = tree.page_links("/a1").unwrap();
//! assert_eq!(links.breadcrumb, "A");
//! assert!(links.previous.is_none());
//! assert_eq!(links.next.unwrap().href, "/a2");
//! ```

mod error;
mod file;
mod node;
mod tree;
mod validate;

pub use error::NavError;
pub use file::NavigationFile;
pub use node::{Behavior, NavNode, ParseBehaviorError};
pub use tree::{
    BREADCRUMB_SEPARATOR, Direction, LANGUAGE_PLACEHOLDER, Link, NavEntry, NavTree, PageLinks,
    SectionHeading,
};
pub use validate::ValidationIssue;
