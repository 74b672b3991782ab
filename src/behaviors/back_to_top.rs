//! Floating back-to-top control.
//!
//! `#backToTop` gains the `visible` class past a fixed scroll offset;
//! clicking it smooth-scrolls to the document top.

use crate::behaviors::{page_metrics, scroll_to_smooth, window_target};
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::scroll::back_to_top_visible;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let control = dom
        .by_id("backToTop")
        .ok_or(BehaviorError::MissingElement("backToTop"))?;

    let mut handle = Handle::new();

    let dom_scroll = dom.clone();
    let control_scroll = control.clone();
    handle.keep_listener(Listener::attach_passive(
        &window_target()?,
        "scroll",
        move |_event| {
            let Some(metrics) = page_metrics() else {
                return;
            };
            dom_scroll.set_class(
                &control_scroll,
                "visible",
                back_to_top_visible(metrics.scroll_top),
            );
        },
    )?);

    handle.keep_listener(Listener::attach(&control, "click", move |_event| {
        scroll_to_smooth(0.0);
    })?);

    Ok(handle)
}
