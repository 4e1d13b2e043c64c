//! Table of contents collection.
//!
//! Only level-2 and level-3 headings appear in the on-page contents: each
//! `h2` opens a section and each `h3` becomes a sub-section of the most
//! recent `h2`.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::slug::SlugCounter;

/// Heading extracted from a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading plain text.
    pub title: String,
    /// Explicit anchor id, if the author set one.
    pub id: Option<String>,
}

impl Heading {
    /// Create a heading without an explicit id.
    #[must_use]
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            id: None,
        }
    }
}

/// Sub-section entry of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub title: String,
}

/// Section of the table of contents with its sub-sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocSection {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Sub-sections in page order.
    pub children: Vec<TocEntry>,
}

/// Error collecting a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TocError {
    /// Level-3 heading with no level-2 heading before it.
    #[error("Cannot add h3 '{title}' to table of contents without a preceding h2")]
    OrphanSubheading {
        /// Heading text.
        title: String,
    },
}

/// Build a table of contents from page headings.
///
/// Headings other than levels 2 and 3 are ignored, as are headings with
/// empty text. Ids are explicit ids when given, otherwise slugs made unique
/// within the page.
///
/// # Errors
///
/// Returns [`TocError::OrphanSubheading`] if a level-3 heading comes before
/// any level-2 heading.
pub fn collect_headings(headings: &[Heading]) -> Result<Vec<TocSection>, TocError> {
    let mut sections: Vec<TocSection> = Vec::new();
    let mut slugs = SlugCounter::new();

    for heading in headings {
        if heading.level != 2 && heading.level != 3 {
            continue;
        }
        let title = heading.title.trim();
        if title.is_empty() {
            continue;
        }

        let id = match &heading.id {
            Some(id) => slugs.claim(id.clone()),
            None => slugs.slug(title),
        };

        if heading.level == 3 {
            let section = sections
                .last_mut()
                .ok_or_else(|| TocError::OrphanSubheading {
                    title: title.to_owned(),
                })?;
            section.children.push(TocEntry {
                id,
                title: title.to_owned(),
            });
        } else {
            sections.push(TocSection {
                id,
                title: title.to_owned(),
                children: Vec::new(),
            });
        }
    }

    Ok(sections)
}

/// Extract top-level headings from markdown.
///
/// Headings nested in block quotes or list items are not part of the page
/// outline and are skipped.
#[must_use]
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES);
    let mut headings = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<Heading> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) if depth == 0 => {
                current = Some(Heading {
                    level: heading_level_to_num(level),
                    title: String::new(),
                    id: id.map(pulldown_cmark::CowStr::into_string),
                });
                depth += 1;
            }
            Event::Start(_) => depth += 1,
            Event::End(TagEnd::Heading(_)) if depth == 1 => {
                depth -= 1;
                if let Some(mut heading) = current.take() {
                    heading.title = heading.title.trim().to_owned();
                    headings.push(heading);
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headings
}

/// Build a table of contents from markdown source.
///
/// # Errors
///
/// Returns [`TocError::OrphanSubheading`] if an `###` heading comes before
/// any `##` heading.
pub fn collect_from_markdown(markdown: &str) -> Result<Vec<TocSection>, TocError> {
    let headings = extract_headings(markdown);
    tracing::debug!(headings = headings.len(), "Extracted headings");
    collect_headings(&headings)
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
