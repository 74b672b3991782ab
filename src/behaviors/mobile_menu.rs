//! Mobile navigation menu.
//!
//! `#mobileMenuBtn` toggles the open state; choosing any link inside the
//! panel closes it again. Both elements are optional — pages without a
//! mobile menu install this as a no-op.

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let (Some(button), Some(nav)) = (dom.by_id("mobileMenuBtn"), dom.by_id("navLinks")) else {
        return Ok(Handle::new());
    };

    let mut handle = Handle::new();

    let dom_toggle = dom.clone();
    let nav_toggle = nav.clone();
    let button_toggle = button.clone();
    handle.keep_listener(Listener::attach(&button, "click", move |_event| {
        toggle_menu(&dom_toggle, &nav_toggle, &button_toggle);
    })?);

    for link in dom.query_within_all(&nav, "a") {
        let dom_close = dom.clone();
        let nav_close = nav.clone();
        let button_close = button.clone();
        handle.keep_listener(Listener::attach(&link, "click", move |_event| {
            close_menu(&dom_close, &nav_close, &button_close);
        })?);
    }

    Ok(handle)
}

/// Flip both halves of the open-state class pair independently, exactly as
/// two `classList.toggle` calls would.
pub(crate) fn toggle_menu<D: Dom>(dom: &D, nav: &D::El, button: &D::El) {
    dom.set_class(nav, "mobile-open", !dom.has_class(nav, "mobile-open"));
    dom.set_class(button, "active", !dom.has_class(button, "active"));
}

pub(crate) fn close_menu<D: Dom>(dom: &D, nav: &D::El, button: &D::El) {
    dom.set_class(nav, "mobile-open", false);
    dom.set_class(button, "active", false);
}
