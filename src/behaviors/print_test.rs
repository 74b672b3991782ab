use super::*;
use crate::dom::fake::FakeDom;

#[test]
fn forces_light_over_a_dark_theme() {
    let dom = FakeDom::new();
    let root = dom.root().unwrap();
    dom.set_attr(&root, "data-theme", "dark");

    force_light_theme(&dom);
    assert_eq!(dom.attr(&root, "data-theme").as_deref(), Some("light"));
}

#[test]
fn sets_light_even_when_theme_was_unset() {
    let dom = FakeDom::new();
    force_light_theme(&dom);
    let root = dom.root().unwrap();
    assert_eq!(dom.attr(&root, "data-theme").as_deref(), Some("light"));
}
