//! Theme toggle behavior.
//!
//! Applies the initial theme (stored preference, else OS preference),
//! flips and persists it on `#themeToggle` clicks with a short press
//! animation, and mirrors live OS preference changes while no explicit
//! preference is stored.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent};

use crate::consts::TOGGLE_PRESS_ANIMATION_MS;
use crate::dom::{Dom, WebDom};
use crate::error::BehaviorError;
use crate::events::Listener;
use crate::registry::Handle;
use crate::theme::{PreferenceStore, Theme, ThemeState, WebPreferenceStore, next_theme};

pub fn install(dom: &WebDom) -> Result<Handle, BehaviorError> {
    let toggle = dom
        .by_id("themeToggle")
        .ok_or(BehaviorError::MissingElement("themeToggle"))?;

    let state = ThemeState {
        stored: WebPreferenceStore.load(),
        system_dark: prefers_dark(),
    };
    if let Some(theme) = state.initial() {
        apply_theme(dom, theme);
    }

    let mut handle = Handle::new();

    let dom_click = dom.clone();
    let toggle_click = toggle.clone();
    handle.keep_listener(Listener::attach(&toggle, "click", move |_event| {
        let next = next_theme(current_theme(&dom_click));
        apply_theme(&dom_click, next);
        WebPreferenceStore.save(next);
        press_feedback(&dom_click, &toggle_click);
    })?);

    if let Some(query) = media_query() {
        let dom_media = dom.clone();
        handle.keep_listener(Listener::attach(&query, "change", move |event| {
            if WebPreferenceStore.load().is_some() {
                return;
            }
            let dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .is_some_and(MediaQueryListEvent::matches);
            apply_theme(&dom_media, if dark { Theme::Dark } else { Theme::Light });
        })?);
    }

    Ok(handle)
}

/// Theme currently carried by the document attribute.
pub(crate) fn current_theme<D: Dom>(dom: &D) -> Option<Theme> {
    let root = dom.root()?;
    let value = dom.attr(&root, "data-theme")?;
    Theme::parse(&value)
}

/// Write the theme onto the document element.
pub(crate) fn apply_theme<D: Dom>(dom: &D, theme: Theme) {
    if let Some(root) = dom.root() {
        dom.set_attr(&root, "data-theme", theme.as_str());
    }
}

/// Momentary scale-down on the toggle control.
fn press_feedback(dom: &WebDom, toggle: &Element) {
    dom.set_style(toggle, "transform", "scale(0.9)");
    let dom = dom.clone();
    let toggle = toggle.clone();
    Timeout::new(TOGGLE_PRESS_ANIMATION_MS, move || {
        dom.set_style(&toggle, "transform", "scale(1)");
    })
    .forget();
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

fn prefers_dark() -> bool {
    media_query().is_some_and(|query| query.matches())
}
