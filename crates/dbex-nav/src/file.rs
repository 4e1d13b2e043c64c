//! Navigation file loading.
//!
//! Navigation is authored as TOML, one `[[groups]]` table per top-level
//! sidebar group with nested `links`:
//!
//! ```toml
//! [[groups]]
//! title = "Getting Started"
//! icon = "terminal"
//!
//! [[groups.links]]
//! title = "Why dbExpression?"
//! href = "/"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::NavError;
use crate::node::NavNode;
use crate::tree::NavTree;

/// Parsed navigation file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NavigationFile {
    /// Top-level groups in sidebar order.
    #[serde(default)]
    pub groups: Vec<NavNode>,
}

impl NavigationFile {
    /// Parse navigation from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Parse`] if the TOML is malformed or a node is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        Ok(toml::from_str(content)?)
    }

    /// Load navigation from a file.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NotFound`] if the file is missing, or an I/O or
    /// parse error.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        if !path.exists() {
            return Err(NavError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), groups = file.groups.len(), "Loaded navigation");
        Ok(file)
    }

    /// Resolve into a [`NavTree`] for the given language.
    #[must_use]
    pub fn into_tree(self, language: &str) -> NavTree {
        NavTree::with_language(&self.groups, language)
    }
}
