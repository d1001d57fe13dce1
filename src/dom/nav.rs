//! Active navigation marking.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::{PageDocument, PageElement};
use crate::config::GlueConfig;

const ROOT_PATH: &str = "/";

/// The dashboard is served at both `/` and `dashboard_path`.
fn canonical<'a>(path: &'a str, dashboard_path: &'a str) -> &'a str {
    if path == ROOT_PATH { dashboard_path } else { path }
}

/// Whether a nav item pointing at `href` represents `current_path`.
#[must_use]
pub fn nav_matches(href: &str, current_path: &str, dashboard_path: &str) -> bool {
    href == current_path || canonical(href, dashboard_path) == canonical(current_path, dashboard_path)
}

/// Add the active class to every nav item matching `current_path`.
/// Returns the number of matching items. Safe to call repeatedly.
pub fn mark_active_nav<D: PageDocument>(doc: &D, config: &GlueConfig, current_path: &str) -> usize {
    let mut marked = 0;
    for item in doc.query_all(&config.nav_item_selector()) {
        let Some(href) = item.attribute("href") else {
            continue;
        };
        if nav_matches(&href, current_path, &config.dashboard_path) {
            item.add_class(&config.active_class);
            marked += 1;
        }
    }
    marked
}
