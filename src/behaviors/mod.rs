//! Installable page behaviors.
//!
//! Each submodule exposes `install(&WebDom) -> Result<Handle, BehaviorError>`
//! and owns one user-visible feature. Behaviors with required elements fail
//! installation when those elements are missing; behaviors over optional
//! elements install as no-ops instead.
//!
//! | Module | Feature | Required elements |
//! |--------|---------|-------------------|
//! | [`theme_toggle`] | Light/dark theme with persistence | `#themeToggle` |
//! | [`copy`] | Copy-to-clipboard buttons | — |
//! | [`progress`] | Reading progress bar | `#progressBar` |
//! | [`sidebar`] | Active-section sidebar highlighting | — |
//! | [`back_to_top`] | Floating back-to-top control | `#backToTop` |
//! | [`navbar`] | Navbar scrolled styling | `#navbar` |
//! | [`smooth_scroll`] | In-page anchor scrolling | — |
//! | [`mobile_menu`] | Mobile navigation panel | — |
//! | [`keyboard`] | Escape / search shortcuts | — |
//! | [`print`] | Light theme before printing | — |
//! | [`reveal`] | Section reveal animation | — |
//! | [`lazy_images`] | Deferred image loading | — |

pub mod back_to_top;
pub mod copy;
pub mod keyboard;
pub mod lazy_images;
pub mod mobile_menu;
pub mod navbar;
pub mod print;
pub mod progress;
pub mod reveal;
pub mod sidebar;
pub mod smooth_scroll;
pub mod theme_toggle;

use web_sys::{EventTarget, ScrollBehavior, ScrollToOptions};

use crate::dom::WebDom;
use crate::error::BehaviorError;
use crate::registry::Registry;

/// Install every behavior in its standard order.
///
/// # Errors
///
/// The first failing install aborts the rest, mirroring a fault in a
/// single load handler.
pub fn install_all(registry: &mut Registry, dom: &WebDom) -> Result<(), BehaviorError> {
    registry.install("theme-toggle", || theme_toggle::install(dom))?;
    registry.install("copy-buttons", || copy::install(dom))?;
    registry.install("scroll-progress", || progress::install(dom))?;
    registry.install("sidebar-nav", || sidebar::install(dom))?;
    registry.install("back-to-top", || back_to_top::install(dom))?;
    registry.install("navbar-state", || navbar::install(dom))?;
    registry.install("smooth-scroll", || smooth_scroll::install(dom))?;
    registry.install("mobile-menu", || mobile_menu::install(dom))?;
    registry.install("keyboard-shortcuts", || keyboard::install(dom))?;
    registry.install("print-theme", || print::install(dom))?;
    registry.install("section-reveal", || reveal::install(dom))?;
    registry.install("lazy-images", || lazy_images::install(dom))?;
    Ok(())
}

/// Viewport and document measurements taken per scroll event.
pub(crate) struct PageMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

pub(crate) fn page_metrics() -> Option<PageMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(PageMetrics {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        viewport_height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
    })
}

pub(crate) fn window_target() -> Result<EventTarget, BehaviorError> {
    web_sys::window()
        .map(Into::into)
        .ok_or(BehaviorError::Unavailable("window"))
}

/// Animated scroll to a document offset.
pub(crate) fn scroll_to_smooth(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
