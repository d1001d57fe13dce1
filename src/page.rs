//! Page-ready initialization.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::GlueConfig;
use crate::dom::PageDocument;
use crate::dom::nav::mark_active_nav;

/// Run once the document is parsed. Returns the number of nav items marked active.
pub fn init_page<D: PageDocument>(doc: &D, config: &GlueConfig, current_path: &str) -> usize {
    log::info!("Page loaded");
    let marked = mark_active_nav(doc, config, current_path);
    log::debug!("marked {marked} nav item(s) active for {current_path}");
    marked
}
