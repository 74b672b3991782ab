//! Shared constants for page behaviors.

// ── Scroll geometry ─────────────────────────────────────────────

/// Offset below the scroll top used as the active-section probe point.
pub const SCROLL_PROBE_OFFSET_PX: f64 = 150.0;

/// Slack from the document bottom within which the last section is forced
/// active.
pub const BOTTOM_SLACK_PX: f64 = 100.0;

/// Scroll offset above which the back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// Scroll offset above which the navbar picks up its scrolled styling.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const FIXED_HEADER_HEIGHT_PX: f64 = 90.0;

// ── Timing ──────────────────────────────────────────────────────

/// Delay before copy-button feedback reverts to its resting state.
pub const COPY_FEEDBACK_RESET_MS: u32 = 2_000;

/// Duration of the theme toggle's press animation.
pub const TOGGLE_PRESS_ANIMATION_MS: u32 = 150;

// ── Observers ───────────────────────────────────────────────────

/// Intersection ratio at which a section counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
