//! Small DOM mutation facade.
//!
//! Behavior logic mutates the page through [`Dom`] instead of touching
//! `web_sys` directly, so the class/attribute/text transitions can run
//! against an in-memory fake in native tests. Measurement (offsets, scroll
//! position) and event wiring stay on `web_sys` in the web layer, where a
//! fake would prove nothing.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::BehaviorError;

/// Lookup and mutation operations behaviors are allowed to perform.
pub trait Dom {
    type El: Clone;

    /// Element with the given id, if present.
    fn by_id(&self, id: &str) -> Option<Self::El>;

    /// All elements matching a selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::El>;

    /// First descendant of `el` matching a selector.
    fn query_within(&self, el: &Self::El, selector: &str) -> Option<Self::El>;

    /// All descendants of `el` matching a selector.
    fn query_within_all(&self, el: &Self::El, selector: &str) -> Vec<Self::El>;

    /// The document element (theme attribute target).
    fn root(&self) -> Option<Self::El>;

    /// Add or remove a single class.
    fn set_class(&self, el: &Self::El, class: &str, on: bool);

    fn has_class(&self, el: &Self::El, class: &str) -> bool;

    /// Set an inline style property.
    fn set_style(&self, el: &Self::El, prop: &str, value: &str);

    fn attr(&self, el: &Self::El, name: &str) -> Option<String>;

    fn set_attr(&self, el: &Self::El, name: &str, value: &str);

    fn remove_attr(&self, el: &Self::El, name: &str);

    fn text(&self, el: &Self::El) -> Option<String>;

    fn set_text(&self, el: &Self::El, text: &str);
}

/// Live implementation over the browser document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// Bind to the global document.
    ///
    /// # Errors
    ///
    /// Fails outside a browser context.
    pub fn new() -> Result<Self, BehaviorError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(BehaviorError::Unavailable("document"))?;
        Ok(Self { document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type El = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        node_list_elements(&list)
    }

    fn query_within(&self, el: &Element, selector: &str) -> Option<Element> {
        el.query_selector(selector).ok().flatten()
    }

    fn query_within_all(&self, el: &Element, selector: &str) -> Vec<Element> {
        let Ok(list) = el.query_selector_all(selector) else {
            return Vec::new();
        };
        node_list_elements(&list)
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn set_class(&self, el: &Element, class: &str, on: bool) {
        let list = el.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        if result.is_err() {
            log::debug!("class `{class}` update failed");
        }
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn set_style(&self, el: &Element, prop: &str, value: &str) {
        if let Some(html) = el.dyn_ref::<HtmlElement>()
            && html.style().set_property(prop, value).is_err()
        {
            log::debug!("style `{prop}` update failed");
        }
    }

    fn attr(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attr(&self, el: &Element, name: &str, value: &str) {
        if el.set_attribute(name, value).is_err() {
            log::debug!("attribute `{name}` update failed");
        }
    }

    fn remove_attr(&self, el: &Element, name: &str) {
        if el.remove_attribute(name).is_err() {
            log::debug!("attribute `{name}` removal failed");
        }
    }

    fn text(&self, el: &Element) -> Option<String> {
        el.text_content()
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.item(index)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            elements.push(el);
        }
    }
    elements
}

/// In-memory DOM double for native tests.
#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    use super::Dom;

    #[derive(Debug, Default)]
    struct FakeEl {
        id: Option<String>,
        /// Selector strings this element answers to, verbatim.
        matches: BTreeSet<String>,
        parent: Option<usize>,
        classes: RefCell<BTreeSet<String>>,
        styles: RefCell<BTreeMap<String, String>>,
        attrs: RefCell<BTreeMap<String, String>>,
        text: RefCell<String>,
    }

    /// Opaque handle into a [`FakeDom`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FakeHandle(usize);

    /// Element zero is the document root.
    #[derive(Debug, Default)]
    pub struct FakeDom {
        els: RefCell<Vec<FakeEl>>,
    }

    impl FakeDom {
        pub fn new() -> Self {
            let dom = Self::default();
            dom.els.borrow_mut().push(FakeEl::default());
            dom
        }

        /// Add a top-level element answering to `id` and/or the given
        /// selector strings.
        pub fn add(&self, id: Option<&str>, matches: &[&str]) -> FakeHandle {
            self.push(id, matches, None)
        }

        pub fn add_child(&self, parent: FakeHandle, matches: &[&str]) -> FakeHandle {
            self.push(None, matches, Some(parent.0))
        }

        fn push(&self, id: Option<&str>, matches: &[&str], parent: Option<usize>) -> FakeHandle {
            let el = FakeEl {
                id: id.map(str::to_owned),
                matches: matches.iter().map(|s| (*s).to_owned()).collect(),
                parent,
                ..FakeEl::default()
            };
            let mut els = self.els.borrow_mut();
            els.push(el);
            FakeHandle(els.len() - 1)
        }

        pub fn classes(&self, el: FakeHandle) -> Vec<String> {
            self.els.borrow()[el.0].classes.borrow().iter().cloned().collect()
        }

        pub fn style(&self, el: FakeHandle, prop: &str) -> Option<String> {
            self.els.borrow()[el.0].styles.borrow().get(prop).cloned()
        }
    }

    impl Dom for FakeDom {
        type El = FakeHandle;

        fn by_id(&self, id: &str) -> Option<FakeHandle> {
            let els = self.els.borrow();
            els.iter().position(|el| el.id.as_deref() == Some(id)).map(FakeHandle)
        }

        fn query_all(&self, selector: &str) -> Vec<FakeHandle> {
            let els = self.els.borrow();
            (0..els.len())
                .filter(|&i| els[i].matches.contains(selector))
                .map(FakeHandle)
                .collect()
        }

        fn query_within(&self, el: &FakeHandle, selector: &str) -> Option<FakeHandle> {
            self.query_within_all(el, selector).into_iter().next()
        }

        fn query_within_all(&self, el: &FakeHandle, selector: &str) -> Vec<FakeHandle> {
            let els = self.els.borrow();
            (0..els.len())
                .filter(|&i| els[i].parent == Some(el.0) && els[i].matches.contains(selector))
                .map(FakeHandle)
                .collect()
        }

        fn root(&self) -> Option<FakeHandle> {
            Some(FakeHandle(0))
        }

        fn set_class(&self, el: &FakeHandle, class: &str, on: bool) {
            let els = self.els.borrow();
            let mut classes = els[el.0].classes.borrow_mut();
            if on {
                classes.insert(class.to_owned());
            } else {
                classes.remove(class);
            }
        }

        fn has_class(&self, el: &FakeHandle, class: &str) -> bool {
            self.els.borrow()[el.0].classes.borrow().contains(class)
        }

        fn set_style(&self, el: &FakeHandle, prop: &str, value: &str) {
            self.els.borrow()[el.0]
                .styles
                .borrow_mut()
                .insert(prop.to_owned(), value.to_owned());
        }

        fn attr(&self, el: &FakeHandle, name: &str) -> Option<String> {
            self.els.borrow()[el.0].attrs.borrow().get(name).cloned()
        }

        fn set_attr(&self, el: &FakeHandle, name: &str, value: &str) {
            self.els.borrow()[el.0]
                .attrs
                .borrow_mut()
                .insert(name.to_owned(), value.to_owned());
        }

        fn remove_attr(&self, el: &FakeHandle, name: &str) {
            self.els.borrow()[el.0].attrs.borrow_mut().remove(name);
        }

        fn text(&self, el: &FakeHandle) -> Option<String> {
            Some(self.els.borrow()[el.0].text.borrow().clone())
        }

        fn set_text(&self, el: &FakeHandle, text: &str) {
            *self.els.borrow()[el.0].text.borrow_mut() = text.to_owned();
        }
    }
}
