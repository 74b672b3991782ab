//! Navbar scroll styling.
//!
//! `#navbar` carries the `scrolled` class past a small scroll offset; the
//! stylesheet handles the rest.

use crate::behaviors::{page_metrics, window_target};
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::scroll::navbar_scrolled;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let navbar = dom
        .by_id("navbar")
        .ok_or(BehaviorError::MissingElement("navbar"))?;

    let dom = dom.clone();
    let mut handle = Handle::new();
    handle.keep_listener(Listener::attach_passive(
        &window_target()?,
        "scroll",
        move |_event| {
            let Some(metrics) = page_metrics() else {
                return;
            };
            dom.set_class(&navbar, "scrolled", navbar_scrolled(metrics.scroll_top));
        },
    )?);
    Ok(handle)
}
