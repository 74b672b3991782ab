//! Pure scroll geometry: reading progress, active-section selection, and
//! the fixed pixel thresholds behind scroll-linked chrome.
//!
//! Everything here is plain arithmetic over measurements taken by the web
//! layer, so it is testable without a browser.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{
    BACK_TO_TOP_THRESHOLD_PX, BOTTOM_SLACK_PX, FIXED_HEADER_HEIGHT_PX,
    NAVBAR_SCROLLED_THRESHOLD_PX, SCROLL_PROBE_OFFSET_PX,
};

/// Vertical span of a tracked section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Percentage of the page scrolled, clamped to `[0, 100]`.
///
/// A non-positive scrollable height (page shorter than the viewport) reads
/// as 0 rather than dividing by zero; rubber-band negative offsets also
/// clamp to 0.
#[must_use]
pub fn progress_percent(scroll_top: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable_height * 100.0).clamp(0.0, 100.0)
}

/// Index of the active section, if any.
///
/// The probe point sits a fixed offset below the scroll top; the last
/// section whose span contains it wins. When the viewport bottom comes
/// within [`BOTTOM_SLACK_PX`] of the document bottom, the last section is
/// forced active regardless of containment.
#[must_use]
pub fn active_section(
    sections: &[SectionBounds],
    scroll_top: f64,
    viewport_height: f64,
    document_height: f64,
) -> Option<usize> {
    if sections.is_empty() {
        return None;
    }

    let probe = scroll_top + SCROLL_PROBE_OFFSET_PX;
    let mut active = None;
    for (index, section) in sections.iter().enumerate() {
        if probe >= section.top && probe < section.top + section.height {
            active = Some(index);
        }
    }

    if scroll_top + viewport_height >= document_height - BOTTOM_SLACK_PX {
        active = Some(sections.len() - 1);
    }
    active
}

/// Whether the back-to-top control should be visible.
#[must_use]
pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top > BACK_TO_TOP_THRESHOLD_PX
}

/// Whether the navbar should carry its scrolled styling.
#[must_use]
pub fn navbar_scrolled(scroll_top: f64) -> bool {
    scroll_top > NAVBAR_SCROLLED_THRESHOLD_PX
}

/// Document offset to scroll to for an anchor target, leaving room for the
/// fixed header. `rect_top` is the target's viewport-relative top.
#[must_use]
pub fn anchor_scroll_target(rect_top: f64, scroll_top: f64) -> f64 {
    rect_top + scroll_top - FIXED_HEADER_HEIGHT_PX
}

/// Whether an href is a same-page anchor worth intercepting: starts with
/// `#` but is not the bare fragment.
#[must_use]
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#"
}
