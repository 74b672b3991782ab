//! Document-level keyboard shortcuts.
//!
//! `Escape` closes the mobile menu when it is open. `Ctrl+K` / `Cmd+K` is
//! reserved for a search feature that has no UI yet; the default browser
//! action is suppressed so the combination stays available.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};

use crate::behaviors::mobile_menu::close_menu;
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;

/// What a keydown should do, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    CloseMobileMenu,
    ReservedSearch,
}

/// Map a key event to an intent.
#[must_use]
pub fn intent_for(key: &str, ctrl: bool, meta: bool) -> Option<KeyIntent> {
    if key == "Escape" {
        return Some(KeyIntent::CloseMobileMenu);
    }
    if (ctrl || meta) && key == "k" {
        return Some(KeyIntent::ReservedSearch);
    }
    None
}

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let target: EventTarget = dom.document().clone().into();
    let dom = dom.clone();

    let mut handle = Handle::new();
    handle.keep_listener(Listener::attach(&target, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match intent_for(&key_event.key(), key_event.ctrl_key(), key_event.meta_key()) {
            Some(KeyIntent::CloseMobileMenu) => {
                if let (Some(nav), Some(button)) =
                    (dom.by_id("navLinks"), dom.by_id("mobileMenuBtn"))
                    && dom.has_class(&nav, "mobile-open")
                {
                    close_menu(&dom, &nav, &button);
                }
            }
            Some(KeyIntent::ReservedSearch) => {
                key_event.prevent_default();
                log::debug!("search shortcut pressed; no search UI is wired yet");
            }
            None => {}
        }
    })?);
    Ok(handle)
}
