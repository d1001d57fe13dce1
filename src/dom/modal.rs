//! Dismiss-on-backdrop-click and dismiss-on-Escape for every modal.
//!
//! Neither function shows a modal; opening is the page's job.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use super::{PageDocument, PageElement};
use crate::config::GlueConfig;

/// Hide the modal whose backdrop was clicked.
///
/// Only a modal that *is* the click target is hidden; clicks on modal
/// content land on a descendant and are ignored. Returns the number hidden.
pub fn dismiss_on_click<D: PageDocument>(doc: &D, config: &GlueConfig, target: Option<&D::Element>) -> usize {
    let Some(target) = target else {
        return 0;
    };
    let mut hidden = 0;
    for modal in doc.query_all(&config.modal_selector()) {
        if modal.is_same(target) {
            modal.hide();
            hidden += 1;
        }
    }
    hidden
}

/// Hide every modal when `key` is the dismiss key. Returns the number hidden.
pub fn dismiss_on_key<D: PageDocument>(doc: &D, config: &GlueConfig, key: &str) -> usize {
    if key != config.dismiss_key {
        return 0;
    }
    let modals = doc.query_all(&config.modal_selector());
    for modal in &modals {
        modal.hide();
    }
    modals.len()
}
