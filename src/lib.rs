//! Interactive behaviors for the static documentation page, compiled to
//! WebAssembly and attached to the DOM at module start.
//!
//! The page itself is plain static markup; this crate progressively enhances
//! it with theme toggling, copy-to-clipboard buttons, scroll-linked chrome
//! (reading progress, active sidebar link, back-to-top, navbar state),
//! smooth in-page scrolling, a mobile menu, keyboard shortcuts, print
//! handling, section reveal animations, and lazy image loading.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`behaviors`] | One installable behavior per page feature |
//! | [`registry`] | Named behavior registry with install/dispose lifecycle |
//! | [`dom`] | Small DOM mutation facade ([`dom::WebDom`] + test double) |
//! | [`events`] | Owned event-listener handles |
//! | [`theme`] | Theme model, pure transitions, preference persistence |
//! | [`scroll`] | Pure scroll geometry (progress, active section, thresholds) |
//! | [`error`] | Behavior installation errors |
//! | [`consts`] | Shared pixel thresholds, delays, and the storage key |
//! | [`util`] | Standalone helpers (debounce) |

pub mod behaviors;
pub mod consts;
pub mod dom;
pub mod error;
pub mod events;
pub mod registry;
pub mod scroll;
pub mod theme;
pub mod util;

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::dom::WebDom;
use crate::registry::Registry;

thread_local! {
    // Keeps every installed behavior (and the closures it owns) alive for
    // the lifetime of the page.
    static PAGE: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

/// Entry point, invoked by the WASM loader once the module is instantiated.
///
/// Installs all page behaviors. A missing required element aborts the
/// remaining installs and is reported through the console logger.
#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger was already initialized");
    }

    let dom = match WebDom::new() {
        Ok(dom) => dom,
        Err(err) => {
            log::error!("page boot failed: {err}");
            return;
        }
    };

    let mut registry = Registry::new();
    match behaviors::install_all(&mut registry, &dom) {
        Ok(()) => log::info!(
            "docpage v{} ready — {} behaviors installed",
            env!("CARGO_PKG_VERSION"),
            registry.len()
        ),
        Err(err) => log::error!("page boot halted: {err}"),
    }

    PAGE.with(|slot| *slot.borrow_mut() = Some(registry));
}
