//! Document access for modal dismissal and nav marking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The behaviors in `modal` and `nav` are written against [`PageDocument`]
//! so they run both on the live DOM (`browser` feature) and on the
//! in-memory fake used by tests.

pub mod modal;
pub mod nav;

#[cfg(test)]
pub(crate) mod fake;

/// A single element handle.
pub trait PageElement {
    /// Identity comparison (same node, not equal content).
    fn is_same(&self, other: &Self) -> bool;
    /// Set the element's visibility to hidden.
    fn hide(&self);
    fn attribute(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str);
}

/// A queryable document. Every query reads the live tree.
pub trait PageDocument {
    type Element: PageElement;

    /// Elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}
