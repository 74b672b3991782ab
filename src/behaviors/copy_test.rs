use super::*;
use crate::dom::fake::{FakeDom, FakeHandle};

struct CopyButton {
    button: FakeHandle,
    text: FakeHandle,
    icon: FakeHandle,
}

fn copy_button(dom: &FakeDom, payload: &str) -> CopyButton {
    let button = dom.add(None, &[".copy-btn"]);
    dom.set_attr(&button, "data-copy", payload);
    let text = dom.add_child(button, &[".copy-text"]);
    dom.set_text(&text, "Copy");
    let icon = dom.add_child(button, &[".copy-icon"]);
    dom.set_text(&icon, "📋");
    CopyButton { button, text, icon }
}

#[test]
fn primary_feedback_swaps_label_icon_and_class() {
    let dom = FakeDom::new();
    let parts = copy_button(&dom, "hello");

    show_copied(&dom, &parts.button, Some(&parts.text), Some(&parts.icon));

    assert!(dom.has_class(&parts.button, "copied"));
    assert_eq!(dom.text(&parts.text).as_deref(), Some("Copied!"));
    assert_eq!(dom.text(&parts.icon).as_deref(), Some("✓"));
}

#[test]
fn primary_revert_restores_captured_contents() {
    let dom = FakeDom::new();
    let parts = copy_button(&dom, "hello");
    let original = CopyLabels {
        text: dom.text(&parts.text),
        icon: dom.text(&parts.icon),
    };

    show_copied(&dom, &parts.button, Some(&parts.text), Some(&parts.icon));
    restore_labels(&dom, &parts.button, Some(&parts.text), Some(&parts.icon), &original);

    assert!(!dom.has_class(&parts.button, "copied"));
    assert_eq!(dom.text(&parts.text).as_deref(), Some("Copy"));
    assert_eq!(dom.text(&parts.icon).as_deref(), Some("📋"));
}

#[test]
fn fallback_feedback_leaves_the_icon_alone() {
    let dom = FakeDom::new();
    let parts = copy_button(&dom, "hello");

    show_copied_fallback(&dom, &parts.button, Some(&parts.text));

    assert!(dom.has_class(&parts.button, "copied"));
    assert_eq!(dom.text(&parts.text).as_deref(), Some("Copied!"));
    assert_eq!(dom.text(&parts.icon).as_deref(), Some("📋"));
}

#[test]
fn fallback_revert_uses_the_literal_copy_label() {
    let dom = FakeDom::new();
    let parts = copy_button(&dom, "hello");
    // Custom resting label, to prove the fallback does not restore it.
    dom.set_text(&parts.text, "Copy command");

    show_copied_fallback(&dom, &parts.button, Some(&parts.text));
    restore_fallback(&dom, &parts.button, Some(&parts.text));

    assert!(!dom.has_class(&parts.button, "copied"));
    assert_eq!(dom.text(&parts.text).as_deref(), Some("Copy"));
}

#[test]
fn feedback_paths_diverge_on_revert() {
    let dom = FakeDom::new();
    let primary = copy_button(&dom, "hello");
    let fallback = copy_button(&dom, "hello");
    dom.set_text(&primary.text, "Copy snippet");
    dom.set_text(&fallback.text, "Copy snippet");

    let original = CopyLabels { text: dom.text(&primary.text), icon: dom.text(&primary.icon) };
    show_copied(&dom, &primary.button, Some(&primary.text), Some(&primary.icon));
    restore_labels(&dom, &primary.button, Some(&primary.text), Some(&primary.icon), &original);

    show_copied_fallback(&dom, &fallback.button, Some(&fallback.text));
    restore_fallback(&dom, &fallback.button, Some(&fallback.text));

    assert_eq!(dom.text(&primary.text).as_deref(), Some("Copy snippet"));
    assert_eq!(dom.text(&fallback.text).as_deref(), Some("Copy"));
}

#[test]
fn missing_label_children_are_tolerated() {
    let dom = FakeDom::new();
    let button = dom.add(None, &[".copy-btn"]);
    dom.set_attr(&button, "data-copy", "hello");

    show_copied(&dom, &button, None, None);
    assert!(dom.has_class(&button, "copied"));
    let original = CopyLabels { text: None, icon: None };
    restore_labels(&dom, &button, None, None, &original);
    assert!(!dom.has_class(&button, "copied"));
}
