//! Authored navigation nodes.
//!
//! [`NavNode`] is the shape a navigation file is written in: a title, an
//! optional link target, display hints, and nested `links`. Nodes carry no
//! derived state; parent, section and breadcrumb are computed by
//! [`NavTree`](crate::NavTree).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Display behaviour of a navigation node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Behavior {
    /// Plain link.
    #[default]
    None,
    /// Collapsible subtree.
    Expandable,
    /// Visual indentation hint with the given level.
    Indent(u8),
}

impl Behavior {
    /// Indentation level for `indent-N` nodes.
    #[must_use]
    pub fn indent_level(self) -> Option<u8> {
        match self {
            Self::Indent(level) => Some(level),
            Self::None | Self::Expandable => None,
        }
    }

    /// Whether the node renders as a collapsible subtree.
    #[must_use]
    pub fn is_expandable(self) -> bool {
        self == Self::Expandable
    }
}

/// Error returned when a `behaviour` value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown behaviour `{0}` (expected `expandable` or `indent-N`)")]
pub struct ParseBehaviorError(String);

impl FromStr for Behavior {
    type Err = ParseBehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "expandable" => Ok(Self::Expandable),
            other => other
                .strip_prefix("indent-")
                .and_then(|level| level.parse().ok())
                .map(Self::Indent)
                .ok_or_else(|| ParseBehaviorError(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Behavior {
    type Error = ParseBehaviorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Expandable => f.write_str("expandable"),
            Self::Indent(level) => write!(f, "indent-{level}"),
        }
    }
}

/// Node of the authored navigation tree.
///
/// A node with children is a group header; a node with `href` and no
/// children is a leaf page. A node may have both.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavNode {
    /// Display label.
    pub title: String,
    /// Link target, absent for pure group headers.
    #[serde(default)]
    pub href: Option<String>,
    /// Child nodes in document order.
    #[serde(default, rename = "links", alias = "children")]
    pub children: Vec<NavNode>,
    /// Display behaviour.
    #[serde(default, rename = "behaviour", alias = "behavior")]
    pub behavior: Behavior,
    /// Symbolic icon key.
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavNode {
    /// Create a leaf page.
    #[must_use]
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            children: Vec::new(),
            behavior: Behavior::None,
            icon: None,
        }
    }

    /// Create a group header without a link target.
    #[must_use]
    pub fn group(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            title: title.into(),
            href: None,
            children,
            behavior: Behavior::None,
            icon: None,
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the display behaviour.
    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set the icon key.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NavNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_behavior_values() {
        assert_eq!("expandable".parse::<Behavior>(), Ok(Behavior::Expandable));
        assert_eq!("indent-1".parse::<Behavior>(), Ok(Behavior::Indent(1)));
        assert_eq!("indent-3".parse::<Behavior>(), Ok(Behavior::Indent(3)));
        assert_eq!("none".parse::<Behavior>(), Ok(Behavior::None));
        assert_eq!("".parse::<Behavior>(), Ok(Behavior::None));
    }

    #[test]
    fn test_parse_behavior_rejects_unknown() {
        let err = "collapsed".parse::<Behavior>().unwrap_err();
        assert!(err.to_string().contains("collapsed"));
        assert!("indent-x".parse::<Behavior>().is_err());
        assert!("indent-".parse::<Behavior>().is_err());
    }

    #[test]
    fn test_behavior_display_matches_authored_form() {
        assert_eq!(Behavior::Expandable.to_string(), "expandable");
        assert_eq!(Behavior::Indent(2).to_string(), "indent-2");
        assert_eq!(Behavior::None.to_string(), "none");
    }

    #[test]
    fn test_indent_level() {
        assert_eq!(Behavior::Indent(1).indent_level(), Some(1));
        assert_eq!(Behavior::Expandable.indent_level(), None);
        assert_eq!(Behavior::None.indent_level(), None);
    }

    #[test]
    fn test_deserialize_nested_node() {
        let toml = r#"
title = "Basic Queries"
href = "/core-concepts/basics"
behaviour = "expandable"

[[links]]
title = "Select Statements"
href = "/core-concepts/basics/select-statement"

[[links]]
title = "Joins"
href = "/core-concepts/basics/join"
"#;
        let node: NavNode = toml::from_str(toml).unwrap();

        assert_eq!(node.title, "Basic Queries");
        assert_eq!(node.href.as_deref(), Some("/core-concepts/basics"));
        assert_eq!(node.behavior, Behavior::Expandable);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].title, "Joins");
        assert_eq!(node.children[1].behavior, Behavior::None);
    }

    #[test]
    fn test_deserialize_invalid_behavior_fails() {
        let toml = r#"
title = "Bad"
behaviour = "sideways"
"#;
        let result: Result<NavNode, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_node_count_includes_descendants() {
        let node = NavNode::group(
            "A",
            vec![
                NavNode::link("A1", "/a1"),
                NavNode::group("A2", vec![NavNode::link("A2a", "/a2a")]),
            ],
        );
        assert_eq!(node.node_count(), 4);
    }

    #[test]
    fn test_builders() {
        let node = NavNode::group("Utilities", Vec::new())
            .with_href("/reference/utilities")
            .with_behavior(Behavior::Expandable)
            .with_icon("box");

        assert_eq!(node.href.as_deref(), Some("/reference/utilities"));
        assert!(node.behavior.is_expandable());
        assert_eq!(node.icon.as_deref(), Some("box"));
    }
}
