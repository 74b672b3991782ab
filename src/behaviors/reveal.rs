//! Section reveal animation.
//!
//! An `IntersectionObserver` adds `animate-in` to each `.step-section` the
//! first time a tenth of it enters the viewport, then stops watching that
//! section. Pages without tracked sections skip the observer entirely.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::REVEAL_THRESHOLD;
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::registry::Handle;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let sections = dom.query_all(".step-section");
    if sections.is_empty() {
        return Ok(Handle::new());
    }

    let dom = dom.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom.set_class(&target, "animate-in", true);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(BehaviorError::from_js)?;
    for section in &sections {
        observer.observe(section);
    }

    let mut handle = Handle::new();
    handle.keep(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(handle)
}
