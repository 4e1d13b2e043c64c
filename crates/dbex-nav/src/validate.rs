//! Build-time checks for authored navigation.
//!
//! The resolver trusts its input; malformed navigation is a content bug
//! and is reported here before the site is published.

use std::collections::HashMap;
use std::fmt;

use crate::error::NavError;
use crate::tree::NavTree;

/// Problem found in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Entry with an empty or whitespace-only title.
    EmptyTitle {
        /// Entry index.
        index: usize,
    },
    /// `expandable` entry without children.
    ExpandableWithoutChildren {
        /// Entry title.
        title: String,
    },
    /// Href used by more than one entry. Only the first is reachable.
    DuplicateHref {
        /// The repeated href.
        href: String,
        /// Title of the entry that wins lookups.
        first: String,
        /// Title of the shadowed entry.
        duplicate: String,
    },
}

impl ValidationIssue {
    /// Whether the issue must block a build.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::DuplicateHref { .. })
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle { index } => write!(f, "entry #{index} has an empty title"),
            Self::ExpandableWithoutChildren { title } => {
                write!(f, "'{title}' is expandable but has no links")
            }
            Self::DuplicateHref {
                href,
                first,
                duplicate,
            } => write!(
                f,
                "'{duplicate}' repeats href {href} already used by '{first}'"
            ),
        }
    }
}

impl NavTree {
    /// Collect every problem in the tree, in document order.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for entry in self.entries() {
            if entry.title.trim().is_empty() {
                issues.push(ValidationIssue::EmptyTitle {
                    index: entry.index(),
                });
            }
            if entry.behavior.is_expandable() && !entry.is_group_header() {
                issues.push(ValidationIssue::ExpandableWithoutChildren {
                    title: entry.title.clone(),
                });
            }
            if let Some(href) = entry.href.as_deref() {
                if let Some(first) = seen.get(href) {
                    issues.push(ValidationIssue::DuplicateHref {
                        href: href.to_owned(),
                        first: (*first).to_owned(),
                        duplicate: entry.title.clone(),
                    });
                } else {
                    seen.insert(href, &entry.title);
                }
            }
        }

        issues
    }

    /// Validate the tree, failing on errors and returning the warnings.
    ///
    /// Nothing is logged; callers report the warnings themselves.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Invalid`] if any issue is an error.
    pub fn check_issues(&self) -> Result<Vec<ValidationIssue>, NavError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(ValidationIssue::is_error);

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(NavError::Invalid(errors))
        }
    }

    /// Validate the tree, logging warnings and failing on errors.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Invalid`] if any issue is an error.
    pub fn check(&self) -> Result<(), NavError> {
        for warning in self.check_issues()? {
            tracing::warn!("{warning}");
        }
        Ok(())
    }
}
