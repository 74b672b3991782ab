//! Print preparation.
//!
//! Forces the light theme attribute on `beforeprint` so printed pages do
//! not come out dark. The attribute is not restored afterward, matching
//! how the page has always behaved.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

use crate::behaviors::window_target;
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::theme::Theme;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let dom = dom.clone();
    let mut handle = Handle::new();
    handle.keep_listener(Listener::attach(
        &window_target()?,
        "beforeprint",
        move |_event| force_light_theme(&dom),
    )?);
    Ok(handle)
}

pub(crate) fn force_light_theme<D: Dom>(dom: &D) {
    if let Some(root) = dom.root() {
        dom.set_attr(&root, "data-theme", Theme::Light.as_str());
    }
}
