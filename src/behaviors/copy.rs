//! Copy-to-clipboard buttons.
//!
//! Each `.copy-btn` copies its `data-copy` attribute verbatim. The primary
//! path is the async clipboard API; when that rejects (or the payload
//! cannot be written) a legacy off-screen textarea plus `execCommand` takes
//! over. The two paths deliberately revert differently: the primary path
//! restores the captured label and icon, the legacy path restores only the
//! label, to the literal `Copy`. That asymmetry is long-shipped behavior
//! and is pinned by tests.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlDocument, HtmlTextAreaElement};

use crate::consts::COPY_FEEDBACK_RESET_MS;
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;

/// Button label contents captured before feedback replaces them.
pub(crate) struct CopyLabels {
    pub text: Option<String>,
    pub icon: Option<String>,
}

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let mut handle = Handle::new();
    for button in dom.query_all(".copy-btn") {
        let dom_click = dom.clone();
        let button_click = button.clone();
        handle.keep_listener(Listener::attach(&button, "click", move |_event| {
            let Some(payload) = dom_click.attr(&button_click, "data-copy") else {
                log::warn!("copy button has no data-copy payload");
                return;
            };
            let dom_task = dom_click.clone();
            let button_task = button_click.clone();
            spawn_local(async move {
                copy_with_feedback(&dom_task, &button_task, &payload).await;
            });
        })?);
    }
    Ok(handle)
}

async fn copy_with_feedback(dom: &WebDom, button: &Element, payload: &str) {
    let text_el = dom.query_within(button, ".copy-text");
    let icon_el = dom.query_within(button, ".copy-icon");

    if write_clipboard(payload).await.is_ok() {
        let original = CopyLabels {
            text: text_el.as_ref().and_then(|el| dom.text(el)),
            icon: icon_el.as_ref().and_then(|el| dom.text(el)),
        };
        show_copied(dom, button, text_el.as_ref(), icon_el.as_ref());

        let dom = dom.clone();
        let button = button.clone();
        Timeout::new(COPY_FEEDBACK_RESET_MS, move || {
            restore_labels(&dom, &button, text_el.as_ref(), icon_el.as_ref(), &original);
        })
        .forget();
    } else {
        legacy_copy(payload);
        show_copied_fallback(dom, button, text_el.as_ref());

        let dom = dom.clone();
        let button = button.clone();
        Timeout::new(COPY_FEEDBACK_RESET_MS, move || {
            restore_fallback(&dom, &button, text_el.as_ref());
        })
        .forget();
    }
}

/// Primary-path feedback: class plus label and icon swap.
pub(crate) fn show_copied<D: Dom>(
    dom: &D,
    button: &D::El,
    text_el: Option<&D::El>,
    icon_el: Option<&D::El>,
) {
    dom.set_class(button, "copied", true);
    if let Some(el) = text_el {
        dom.set_text(el, "Copied!");
    }
    if let Some(el) = icon_el {
        dom.set_text(el, "✓");
    }
}

/// Primary-path revert: both label and icon return to their captured
/// contents.
pub(crate) fn restore_labels<D: Dom>(
    dom: &D,
    button: &D::El,
    text_el: Option<&D::El>,
    icon_el: Option<&D::El>,
    original: &CopyLabels,
) {
    dom.set_class(button, "copied", false);
    if let (Some(el), Some(text)) = (text_el, original.text.as_deref()) {
        dom.set_text(el, text);
    }
    if let (Some(el), Some(icon)) = (icon_el, original.icon.as_deref()) {
        dom.set_text(el, icon);
    }
}

/// Legacy-path feedback: class plus label swap, icon untouched.
pub(crate) fn show_copied_fallback<D: Dom>(dom: &D, button: &D::El, text_el: Option<&D::El>) {
    dom.set_class(button, "copied", true);
    if let Some(el) = text_el {
        dom.set_text(el, "Copied!");
    }
}

/// Legacy-path revert: label becomes the literal `Copy`, icon stays as the
/// feedback left it.
pub(crate) fn restore_fallback<D: Dom>(dom: &D, button: &D::El, text_el: Option<&D::El>) {
    dom.set_class(button, "copied", false);
    if let Some(el) = text_el {
        dom.set_text(el, "Copy");
    }
}

async fn write_clipboard(payload: &str) -> Result<(), BehaviorError> {
    let window = web_sys::window().ok_or(BehaviorError::Unavailable("window"))?;
    let promise = window.navigator().clipboard().write_text(payload);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(BehaviorError::from_js)
}

/// Selection-based copy for browsers without (or denying) the async
/// clipboard API.
fn legacy_copy(payload: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("textarea") else {
        return;
    };
    let Ok(textarea) = el.dyn_into::<HtmlTextAreaElement>() else {
        return;
    };
    textarea.set_value(payload);
    let style = textarea.style();
    if style.set_property("position", "fixed").is_err()
        || style.set_property("opacity", "0").is_err()
    {
        log::debug!("legacy copy textarea styling failed");
    }
    if body.append_child(&textarea).is_err() {
        return;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    if !copied {
        log::warn!("legacy clipboard copy failed");
    }
    if body.remove_child(&textarea).is_err() {
        log::debug!("legacy copy textarea was not removed");
    }
}
