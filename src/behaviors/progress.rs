//! Reading progress bar.
//!
//! Recomputes the scrolled percentage on every scroll event (deliberately
//! unthrottled) and once at install, and applies it as the width of
//! `#progressBar`.

use crate::behaviors::{page_metrics, window_target};
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::scroll::progress_percent;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let bar = dom
        .by_id("progressBar")
        .ok_or(BehaviorError::MissingElement("progressBar"))?;

    let dom = dom.clone();
    let update = move || {
        let Some(metrics) = page_metrics() else {
            return;
        };
        let percent = progress_percent(
            metrics.scroll_top,
            metrics.document_height - metrics.viewport_height,
        );
        dom.set_style(&bar, "width", &format!("{percent}%"));
    };
    update();

    let mut handle = Handle::new();
    handle.keep_listener(Listener::attach_passive(
        &window_target()?,
        "scroll",
        move |_event| update(),
    )?);
    Ok(handle)
}
