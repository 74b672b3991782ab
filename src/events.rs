//! Owned DOM event listeners.
//!
//! A [`Listener`] keeps its `Closure` alive for as long as the handle
//! exists and removes the underlying DOM registration on detach, so
//! behaviors can be disposed without leaking callbacks.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::BehaviorError;

/// An attached DOM event listener, detached on [`Listener::detach`].
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach a handler to `target`.
    ///
    /// # Errors
    ///
    /// Propagates a JS-side failure from `addEventListener`.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BehaviorError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(BehaviorError::from_js)?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Attach a passive handler (scroll listeners never call
    /// `preventDefault`, so the browser may keep scrolling off-thread).
    ///
    /// # Errors
    ///
    /// Propagates a JS-side failure from `addEventListener`.
    pub fn attach_passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BehaviorError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(BehaviorError::from_js)?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Remove the DOM registration and drop the closure.
    pub fn detach(self) {
        if self
            .target
            .remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            )
            .is_err()
        {
            log::debug!("`{}` listener was not removed", self.event);
        }
    }
}
