use std::cell::Cell;
use std::rc::Rc;

use super::*;

// Scheduling a run needs a browser timer, so these tests cover only the
// parts that execute natively.

#[test]
fn new_debounce_has_nothing_pending() {
    let debounce = Debounce::new(250, || {});
    assert_eq!(debounce.wait_ms(), 250);
    assert!(!debounce.is_pending());
}

#[test]
fn cancel_without_pending_run_never_fires_the_action() {
    let fired = Rc::new(Cell::new(false));
    let fired_probe = Rc::clone(&fired);
    let debounce = Debounce::new(100, move || fired_probe.set(true));

    debounce.cancel();
    debounce.cancel();
    assert!(!fired.get());
    assert!(!debounce.is_pending());
}
