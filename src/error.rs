//! Behavior installation errors.
//!
//! Optional page features guard their own absent elements and install as
//! no-ops; these errors cover the cases that must not pass silently — a
//! required element missing from the markup or a browser call failing
//! during wiring.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while installing a page behavior.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A required element id was not found in the document.
    #[error("required element `#{0}` is missing")]
    MissingElement(&'static str),

    /// A browser global (window, document) is unavailable.
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),

    /// A JS-side call rejected or threw during wiring.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl BehaviorError {
    /// Wrap an opaque `JsValue` error.
    #[must_use]
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
