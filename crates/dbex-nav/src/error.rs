//! Navigation error types.

use std::path::PathBuf;

use crate::validate::ValidationIssue;

/// Error loading or validating navigation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Navigation file not found.
    #[error("Navigation file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("Navigation parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Tree failed validation.
    #[error("Invalid navigation: {}", format_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
