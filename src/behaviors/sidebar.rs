//! Active-section sidebar highlighting.
//!
//! On every scroll event the tracked sections are re-measured and the
//! sidebar link whose anchor matches the active section gets the `active`
//! class; every other link loses it. Installs as a no-op when the page has
//! no tracked sections.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::behaviors::{page_metrics, window_target};
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::scroll::{SectionBounds, active_section};

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let sections = dom.query_all(".step-section");
    if sections.is_empty() {
        return Ok(Handle::new());
    }
    let links = dom.query_all(".sidebar-link");

    let dom = dom.clone();
    let update = move || {
        let Some(metrics) = page_metrics() else {
            return;
        };
        let bounds: Vec<SectionBounds> = sections.iter().map(section_bounds).collect();
        let active = active_section(
            &bounds,
            metrics.scroll_top,
            metrics.viewport_height,
            metrics.document_height,
        );
        let active_id = active.and_then(|index| sections[index].get_attribute("id"));
        apply_active_link(&dom, &links, active_id.as_deref());
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

/// Sections are laid out in normal flow, so offset geometry is the
/// document-space span.
fn section_bounds(el: &Element) -> SectionBounds {
    el.dyn_ref::<HtmlElement>().map_or(
        SectionBounds { top: 0.0, height: 0.0 },
        |html| SectionBounds {
            top: f64::from(html.offset_top()),
            height: f64::from(html.offset_height()),
        },
    )
}

/// Clear the marker everywhere, then set it on the single link targeting
/// the active section.
pub(crate) fn apply_active_link<D: Dom>(dom: &D, links: &[D::El], active_id: Option<&str>) {
    for link in links {
        dom.set_class(link, "active", false);
        if let Some(id) = active_id
            && dom
                .attr(link, "href")
                .is_some_and(|href| href == format!("#{id}"))
        {
            dom.set_class(link, "active", true);
        }
    }
}
