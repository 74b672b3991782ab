//! Trailing-edge debounce over browser timers.
//!
//! Available for scroll-heavy pages; the stock behaviors attach their
//! scroll listeners unthrottled, so nothing installs one of these today.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs its action once the calls stop arriving for `wait_ms`.
pub struct Debounce {
    wait_ms: u32,
    action: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            action: Rc::new(action),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule the action, cancelling any earlier pending run.
    pub fn call(&self) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            previous.cancel();
        }
        let action = Rc::clone(&self.action);
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.wait_ms, move || {
            pending.borrow_mut().take();
            action();
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drop any pending run without executing it.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
    }

    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Whether a run is currently scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
