//! On-page table of contents for documentation pages.
//!
//! Collects `h2`/`h3` headings into a two-level table of contents with
//! unique anchor ids, and tracks which entry is active for a scroll position.
//!
//! ```
//! use dbex_toc::{collect_from_markdown, is_section_active};
//!
//! let toc = collect_from_markdown("## Syntax\n\n### Arguments\n\n## Examples\n").unwrap();
//!
//! assert_eq!(toc[0].id, "syntax");
//! assert!(is_section_active(&toc[0], "arguments"));
//! assert!(!is_section_active(&toc[1], "arguments"));
//! ```

mod active;
mod collect;
mod slug;

pub use active::{ActiveTracker, active_heading, heading_ids, is_section_active};
pub use collect::{
    Heading, TocEntry, TocError, TocSection, collect_from_markdown, collect_headings,
    extract_headings,
};
pub use slug::{SlugCounter, slugify};
