//! `dbex-docs toc` command implementation.

use std::path::PathBuf;

use clap::Args;
use dbex_toc::{TocSection, collect_from_markdown, is_section_active};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Markdown file to read.
    file: PathBuf,

    /// Heading id currently in view; marks the matching section active.
    #[arg(long)]
    active: Option<String>,
}

/// Table of contents section with its highlight state.
#[derive(Serialize)]
struct TocSectionView<'a> {
    #[serde(flatten)]
    section: &'a TocSection,
    active: bool,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its headings are malformed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let markdown = std::fs::read_to_string(&self.file)?;
        let toc = collect_from_markdown(&markdown)?;
        let active = self
            .active
            .or_else(|| toc.first().map(|section| section.id.clone()));

        output.json(&section_views(&toc, active.as_deref()))
    }
}

fn section_views<'a>(toc: &'a [TocSection], active: Option<&str>) -> Vec<TocSectionView<'a>> {
    toc.iter()
        .map(|section| TocSectionView {
            section,
            active: active.is_some_and(|id| is_section_active(section, id)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_views_mark_parent_of_active_child() {
        let toc = collect_from_markdown("## Syntax\n\n### Arguments\n\n## Examples\n").unwrap();

        let views = section_views(&toc, Some("arguments"));

        assert!(views[0].active);
        assert!(!views[1].active);
        let json = serde_json::to_value(&views).unwrap();
        assert_eq!(json[0]["id"], "syntax");
        assert_eq!(json[0]["active"], true);
        assert_eq!(json[0]["children"][0]["id"], "arguments");
    }

    #[test]
    fn test_section_views_without_active() {
        let toc = collect_from_markdown("## Syntax\n").unwrap();

        let views = section_views(&toc, None);

        assert!(!views[0].active);
    }
}
