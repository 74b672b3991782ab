//! Deferred image loading.
//!
//! Images shipped with a `data-src` attribute get their real source swapped
//! in the first time they approach the viewport. Skipped when the page has
//! no such images.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::registry::Handle;

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let images = dom.query_all("img[data-src]");
    if images.is_empty() {
        return Ok(Handle::new());
    }

    let dom = dom.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(source) = dom.attr(&target, "data-src")
                    && let Some(image) = target.dyn_ref::<HtmlImageElement>()
                {
                    image.set_src(&source);
                    dom.remove_attr(&target, "data-src");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(BehaviorError::from_js)?;
    for image in &images {
        observer.observe(image);
    }

    let mut handle = Handle::new();
    handle.keep(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(handle)
}
