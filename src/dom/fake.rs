//! In-memory document used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{PageDocument, PageElement};

#[derive(Debug, Default)]
pub struct FakeNode {
    pub classes: RefCell<Vec<String>>,
    pub attrs: HashMap<String, String>,
    pub hidden: Cell<bool>,
}

#[derive(Debug, Clone)]
pub struct FakeElement(pub Rc<FakeNode>);

impl FakeElement {
    pub fn new(classes: &[&str]) -> Self {
        Self(Rc::new(FakeNode {
            classes: RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()),
            ..FakeNode::default()
        }))
    }

    pub fn with_href(classes: &[&str], href: &str) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("href".to_owned(), href.to_owned());
        Self(Rc::new(FakeNode {
            classes: RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()),
            attrs,
            hidden: Cell::new(false),
        }))
    }

    pub fn is_hidden(&self) -> bool {
        self.0.hidden.get()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.0.classes.borrow().iter().filter(|c| *c == class).count()
    }
}

impl PageElement for FakeElement {
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn hide(&self) {
        self.0.hidden.set(true);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attrs.get(name).cloned()
    }

    fn add_class(&self, class: &str) {
        // Mirrors `classList.add`: no duplicates.
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_owned());
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeDocument {
    pub elements: Vec<FakeElement>,
}

impl FakeDocument {
    pub fn new(elements: Vec<FakeElement>) -> Self {
        Self { elements }
    }
}

impl PageDocument for FakeDocument {
    type Element = FakeElement;

    /// Supports single-class selectors (`.modal`) only.
    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let Some(class) = selector.strip_prefix('.') else {
            return Vec::new();
        };
        self.elements.iter().filter(|e| e.has_class(class)).cloned().collect()
    }
}
