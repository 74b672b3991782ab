//! Smooth scrolling for same-page anchors.
//!
//! Intercepts clicks on `a[href^="#"]` (bare `#` is left alone), scrolls
//! to the target minus the fixed header height, and pushes the fragment
//! onto history so the URL updates without a jump.

use wasm_bindgen::JsValue;

use crate::behaviors::{page_metrics, scroll_to_smooth};
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::scroll::{anchor_scroll_target, is_in_page_anchor};

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let mut handle = Handle::new();
    for anchor in dom.query_all(r##"a[href^="#"]"##) {
        let dom_click = dom.clone();
        let anchor_click = anchor.clone();
        handle.keep_listener(Listener::attach(&anchor, "click", move |event| {
            let Some(href) = dom_click.attr(&anchor_click, "href") else {
                return;
            };
            if !is_in_page_anchor(&href) {
                return;
            }
            let Some(target) = dom_click.document().query_selector(&href).ok().flatten()
            else {
                return;
            };
            event.prevent_default();

            let Some(metrics) = page_metrics() else {
                return;
            };
            let top = anchor_scroll_target(
                target.get_bounding_client_rect().top(),
                metrics.scroll_top,
            );
            scroll_to_smooth(top);
            push_fragment(&href);
        })?);
    }
    Ok(handle)
}

/// Update the URL fragment without navigating.
fn push_fragment(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history()
        && history
            .push_state_with_url(&JsValue::NULL, "", Some(href))
            .is_err()
    {
        log::debug!("history fragment update failed for `{href}`");
    }
}
