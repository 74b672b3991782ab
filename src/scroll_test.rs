#![allow(clippy::float_cmp)]

use super::*;

fn three_sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { top: 0.0, height: 600.0 },
        SectionBounds { top: 600.0, height: 800.0 },
        SectionBounds { top: 1400.0, height: 600.0 },
    ]
}

// --- Progress ---

#[test]
fn progress_is_zero_at_top() {
    assert_eq!(progress_percent(0.0, 1000.0), 0.0);
}

#[test]
fn progress_is_hundred_at_bottom() {
    assert_eq!(progress_percent(1000.0, 1000.0), 100.0);
}

#[test]
fn progress_scales_linearly() {
    assert_eq!(progress_percent(250.0, 1000.0), 25.0);
}

#[test]
fn progress_clamps_past_the_bottom() {
    assert_eq!(progress_percent(1500.0, 1000.0), 100.0);
}

#[test]
fn progress_clamps_rubber_band_overscroll() {
    assert_eq!(progress_percent(-40.0, 1000.0), 0.0);
}

#[test]
fn progress_handles_zero_scrollable_height() {
    let value = progress_percent(0.0, 0.0);
    assert!(value.is_finite());
    assert_eq!(value, 0.0);
}

#[test]
fn progress_handles_negative_scrollable_height() {
    assert_eq!(progress_percent(10.0, -5.0), 0.0);
}

// --- Active section ---

#[test]
fn no_sections_means_no_active_index() {
    assert_eq!(active_section(&[], 100.0, 900.0, 2000.0), None);
}

#[test]
fn probe_point_selects_containing_section() {
    let sections = three_sections();
    // scroll 0 → probe at 150, inside section 0.
    assert_eq!(active_section(&sections, 0.0, 500.0, 5000.0), Some(0));
    // scroll 500 → probe at 650, inside section 1.
    assert_eq!(active_section(&sections, 500.0, 500.0, 5000.0), Some(1));
}

#[test]
fn probe_above_all_sections_yields_none() {
    let sections = vec![SectionBounds { top: 1000.0, height: 400.0 }];
    assert_eq!(active_section(&sections, 0.0, 500.0, 5000.0), None);
}

#[test]
fn section_end_is_exclusive() {
    let sections = three_sections();
    // probe exactly at section 0's end (600) belongs to section 1.
    assert_eq!(active_section(&sections, 450.0, 500.0, 5000.0), Some(1));
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let sections = vec![
        SectionBounds { top: 0.0, height: 1000.0 },
        SectionBounds { top: 100.0, height: 100.0 },
    ];
    assert_eq!(active_section(&sections, 0.0, 500.0, 5000.0), Some(1));
}

#[test]
fn near_bottom_forces_last_section() {
    let sections = three_sections();
    // Probe sits inside section 0, but the viewport bottom is within the
    // bottom slack, so the last section wins.
    assert_eq!(active_section(&sections, 100.0, 1950.0, 2100.0), Some(2));
}

#[test]
fn bottom_override_still_requires_sections() {
    assert_eq!(active_section(&[], 100.0, 1950.0, 2000.0), None);
}

// --- Fixed thresholds ---

#[test]
fn back_to_top_threshold_is_exclusive() {
    assert!(!back_to_top_visible(500.0));
    assert!(back_to_top_visible(500.1));
    assert!(!back_to_top_visible(0.0));
}

#[test]
fn navbar_threshold_is_exclusive() {
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(50.1));
}

// --- Anchors ---

#[test]
fn anchor_target_subtracts_header_height() {
    assert_eq!(anchor_scroll_target(300.0, 1000.0), 1210.0);
}

#[test]
fn in_page_anchor_excludes_bare_hash() {
    assert!(is_in_page_anchor("#setup"));
    assert!(!is_in_page_anchor("#"));
    assert!(!is_in_page_anchor("/docs"));
    assert!(!is_in_page_anchor("https://example.com/#setup"));
    assert!(!is_in_page_anchor(""));
}
