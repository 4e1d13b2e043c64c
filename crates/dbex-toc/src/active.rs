//! Active section tracking for the on-page table of contents.

use crate::collect::TocSection;

/// Whether `section` or one of its direct sub-sections has `active_id`.
#[must_use]
pub fn is_section_active(section: &TocSection, active_id: &str) -> bool {
    section.id == active_id || section.children.iter().any(|child| child.id == active_id)
}

/// Heading ids in page order: each section followed by its sub-sections.
#[must_use]
pub fn heading_ids(toc: &[TocSection]) -> Vec<&str> {
    toc.iter()
        .flat_map(|section| {
            std::iter::once(section.id.as_str())
                .chain(section.children.iter().map(|child| child.id.as_str()))
        })
        .collect()
}

/// Determine the active heading for a scroll position.
///
/// `offset` returns the top offset of a heading on the page, or `None` if
/// the heading is not rendered (such headings are skipped). The active
/// heading is the last one whose top is at or above `scroll_top`; above the
/// first heading, the first heading is active. Returns `None` for an empty
/// table of contents.
pub fn active_heading<'a, F>(toc: &'a [TocSection], offset: F, scroll_top: f64) -> Option<&'a str>
where
    F: Fn(&str) -> Option<f64>,
{
    let ids = heading_ids(toc);
    let mut current = *ids.first()?;

    for id in ids {
        let Some(top) = offset(id) else {
            continue;
        };
        if scroll_top >= top {
            current = id;
        } else {
            break;
        }
    }

    Some(current)
}

/// Tracks the active table of contents entry across scroll events.
///
/// Each event recomputes the active id from scratch; the last event wins.
#[derive(Debug, Clone, Default)]
pub struct ActiveTracker {
    active: Option<String>,
}

impl ActiveTracker {
    /// Create a tracker with the first section active.
    #[must_use]
    pub fn new(toc: &[TocSection]) -> Self {
        Self {
            active: toc.first().map(|section| section.id.clone()),
        }
    }

    /// Currently active heading id.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active heading after a scroll.
    pub fn on_scroll<F>(&mut self, toc: &[TocSection], offset: F, scroll_top: f64)
    where
        F: Fn(&str) -> Option<f64>,
    {
        self.active = active_heading(toc, offset, scroll_top).map(str::to_owned);
    }

    /// Whether `section` should be highlighted.
    #[must_use]
    pub fn is_active(&self, section: &TocSection) -> bool {
        self.active
            .as_deref()
            .is_some_and(|id| is_section_active(section, id))
    }
}
