//! Resolved navigation tree.
//!
//! [`NavTree`] flattens an authored [`NavNode`] forest into a pre-order
//! arena. Parent, section and child relationships are tracked by indices
//! into that arena, so the tree holds no reference cycles and is cheap to
//! share between threads once built.
//!
//! # Architecture
//!
//! - Entries are stored in document order (depth-first, children in array order)
//! - Every node is stored, group headers included; only prev/next selection
//!   skips entries without an `href`
//! - Breadcrumbs are computed once at build time
//! - Href lookups use a `HashMap` that keeps the first entry for each href

use std::collections::HashMap;

use serde::Serialize;

use crate::node::{Behavior, NavNode};

/// Separator between breadcrumb titles.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Placeholder in hrefs replaced by the configured language.
pub const LANGUAGE_PLACEHOLDER: &str = "{current_language}";

/// Search direction for [`NavTree::find_adjacent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the document.
    Previous,
    /// Towards the end of the document.
    Next,
}

/// Flattened navigation node with derived relationships.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Display label.
    pub title: String,
    /// Link target with placeholders substituted.
    pub href: Option<String>,
    /// Display behaviour.
    pub behavior: Behavior,
    /// Symbolic icon key.
    pub icon: Option<String>,
    index: usize,
    parent: Option<usize>,
    section: usize,
    children: Vec<usize>,
    breadcrumb: String,
}

impl NavEntry {
    /// Position of this entry in document order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the parent entry, `None` for top-level entries.
    #[must_use]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Index of the top-level entry owning this entry.
    #[must_use]
    pub fn section(&self) -> usize {
        self.section
    }

    /// Indices of direct children in document order.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Group header titles from the root down to the parent, joined by `" > "`.
    #[must_use]
    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    /// Whether this entry has children.
    #[must_use]
    pub fn is_group_header(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this entry has an `href` and no children.
    #[must_use]
    pub fn is_leaf_page(&self) -> bool {
        self.href.is_some() && self.children.is_empty()
    }

    /// Whether this entry can be navigated to.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.href.is_some()
    }

    fn link(&self) -> Option<Link> {
        self.href.as_ref().map(|href| Link {
            title: self.title.clone(),
            href: href.clone(),
        })
    }
}

/// Title and target of a navigable page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display title.
    pub title: String,
    /// Link target.
    pub href: String,
}

/// Navigation data for one page, as consumed by the page layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    /// Page title.
    pub title: String,
    /// Page path.
    pub href: String,
    /// Title of the top-level group the page belongs to.
    pub section: String,
    /// Breadcrumb string, empty for pages without group ancestors.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub breadcrumb: String,
    /// Nearest navigable page before this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    /// Nearest navigable page after this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
}

/// Top-level navigation group, rendered as a sidebar heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    /// Index of the top-level entry.
    pub index: usize,
    /// Group title.
    pub title: String,
    /// Group icon key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Immutable, flattened navigation tree.
#[derive(Clone, Debug)]
pub struct NavTree {
    entries: Vec<NavEntry>,
    roots: Vec<usize>,
    href_index: HashMap<String, usize>,
}

impl NavTree {
    /// Flatten a navigation forest.
    ///
    /// Hrefs are kept verbatim; see [`NavTree::with_language`] for
    /// placeholder substitution.
    #[must_use]
    pub fn flatten(forest: &[NavNode]) -> Self {
        Self::build(forest, None)
    }

    /// Flatten a navigation forest, replacing `{current_language}` in hrefs.
    #[must_use]
    pub fn with_language(forest: &[NavNode], language: &str) -> Self {
        Self::build(forest, Some(language))
    }

    fn build(forest: &[NavNode], language: Option<&str>) -> Self {
        let capacity = forest.iter().map(NavNode::node_count).sum();
        let mut entries: Vec<NavEntry> = Vec::with_capacity(capacity);
        let mut roots = Vec::with_capacity(forest.len());

        // (node, parent, section); section is None for top-level nodes
        let mut stack: Vec<(&NavNode, Option<usize>, Option<usize>)> =
            forest.iter().rev().map(|node| (node, None, None)).collect();

        while let Some((node, parent, section)) = stack.pop() {
            let index = entries.len();
            let section = section.unwrap_or(index);

            if let Some(parent) = parent {
                entries[parent].children.push(index);
            } else {
                roots.push(index);
            }

            let href = match (&node.href, language) {
                (Some(href), Some(language)) => {
                    Some(href.replace(LANGUAGE_PLACEHOLDER, language))
                }
                (href, _) => href.clone(),
            };

            entries.push(NavEntry {
                title: node.title.clone(),
                href,
                behavior: node.behavior,
                icon: node.icon.clone(),
                index,
                parent,
                section,
                children: Vec::new(),
                breadcrumb: String::new(),
            });

            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (child, Some(index), Some(section))),
            );
        }

        let mut tree = Self {
            entries,
            roots,
            href_index: HashMap::new(),
        };

        for index in 0..tree.entries.len() {
            tree.entries[index].breadcrumb = tree.compute_breadcrumb(index);
            if let Some(href) = &tree.entries[index].href {
                tree.href_index.entry(href.clone()).or_insert(index);
            }
        }

        tracing::debug!(
            entries = tree.entries.len(),
            sections = tree.roots.len(),
            "Built navigation tree"
        );

        tree
    }

    /// All entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Entry at `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    /// Number of entries (group headers and pages).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the breadcrumb of an entry by walking its parent links.
    ///
    /// Collects the titles of ancestors that have children, ordered from the
    /// root to the immediate parent. The entry's own title is never included.
    /// Returns an empty string for unknown indices.
    #[must_use]
    pub fn compute_breadcrumb(&self, index: usize) -> String {
        let mut titles = Vec::new();
        let mut current = self.entries.get(index).and_then(|entry| entry.parent);
        while let Some(i) = current {
            let ancestor = &self.entries[i];
            if ancestor.is_group_header() {
                titles.push(ancestor.title.as_str());
            }
            current = ancestor.parent;
        }
        titles.reverse();
        titles.join(BREADCRUMB_SEPARATOR)
    }

    /// Find the nearest navigable entry before or after `index`.
    ///
    /// Entries without an `href` are skipped. There is no wraparound.
    #[must_use]
    pub fn find_adjacent(&self, index: usize, direction: Direction) -> Option<&NavEntry> {
        if index >= self.entries.len() {
            return None;
        }
        match direction {
            Direction::Previous => self.entries[..index]
                .iter()
                .rev()
                .find(|entry| entry.is_navigable()),
            Direction::Next => self.entries[index + 1..]
                .iter()
                .find(|entry| entry.is_navigable()),
        }
    }

    /// Find the first entry whose `href` equals `current_path` exactly.
    ///
    /// No normalization is applied; callers strip trailing slashes and
    /// query strings themselves.
    #[must_use]
    pub fn resolve_current_page(&self, current_path: &str) -> Option<&NavEntry> {
        self.href_index
            .get(current_path)
            .map(|&index| &self.entries[index])
    }

    /// Navigation data for the page at `current_path`.
    ///
    /// Returns `None` when the page is not part of the navigation.
    #[must_use]
    pub fn page_links(&self, current_path: &str) -> Option<PageLinks> {
        let entry = self.resolve_current_page(current_path)?;
        let index = entry.index;

        Some(PageLinks {
            title: entry.title.clone(),
            href: current_path.to_owned(),
            section: self.entries[entry.section].title.clone(),
            breadcrumb: entry.breadcrumb.clone(),
            previous: self
                .find_adjacent(index, Direction::Previous)
                .and_then(NavEntry::link),
            next: self
                .find_adjacent(index, Direction::Next)
                .and_then(NavEntry::link),
        })
    }

    /// Top-level groups in document order.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionHeading> {
        self.roots
            .iter()
            .map(|&index| {
                let entry = &self.entries[index];
                SectionHeading {
                    index,
                    title: entry.title.clone(),
                    icon: entry.icon.clone(),
                }
            })
            .collect()
    }

    /// Entries owned by the top-level group at `section`, excluding the
    /// group entry itself.
    pub fn section_nodes(&self, section: usize) -> impl Iterator<Item = &NavEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.section == section && entry.index != section)
    }

    /// Whether the expandable entry at `index` contains the current page.
    ///
    /// True when the entry's own `href` or the `href` of one of its direct
    /// children equals `current_path`. Collapsible groups containing the
    /// current page are rendered expanded.
    #[must_use]
    pub fn is_in_expandable(&self, index: usize, current_path: &str) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        let matches = |e: &NavEntry| e.href.as_deref() == Some(current_path);
        matches(entry)
            || entry
                .children
                .iter()
                .any(|&child| matches(&self.entries[child]))
    }

    /// Navigable hrefs in document order, without duplicates.
    #[must_use]
    pub fn leaf_hrefs(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let href = entry.href.as_deref()?;
                (self.href_index.get(href) == Some(&entry.index)).then_some(href)
            })
            .collect()
    }
}
