use super::*;
use crate::dom::fake::{FakeDocument, FakeElement};

#[test]
fn exact_href_matches() {
    assert!(nav_matches("/students", "/students", "/dashboard"));
    assert!(!nav_matches("/students", "/attendance", "/dashboard"));
}

#[test]
fn root_and_dashboard_are_equivalent() {
    assert!(nav_matches("/dashboard", "/", "/dashboard"));
    assert!(nav_matches("/", "/dashboard", "/dashboard"));
    assert!(!nav_matches("/", "/other", "/dashboard"));
}

#[test]
fn mark_active_nav_flags_matching_items() {
    let config = GlueConfig::default();
    let home = FakeElement::with_href(&["nav-item"], "/");
    let students = FakeElement::with_href(&["nav-item"], "/students");
    let doc = FakeDocument::new(vec![home.clone(), students.clone()]);

    assert_eq!(mark_active_nav(&doc, &config, "/dashboard"), 1);
    assert!(home.has_class("active"));
    assert!(!students.has_class("active"));
}

#[test]
fn mark_active_nav_skips_unrelated_path() {
    let config = GlueConfig::default();
    let home = FakeElement::with_href(&["nav-item"], "/");
    let doc = FakeDocument::new(vec![home.clone()]);

    assert_eq!(mark_active_nav(&doc, &config, "/other"), 0);
    assert!(!home.has_class("active"));
}

#[test]
fn mark_active_nav_ignores_items_without_href_and_non_nav_links() {
    let config = GlueConfig::default();
    let bare = FakeElement::new(&["nav-item"]);
    let footer = FakeElement::with_href(&["footer-link"], "/reports");
    let doc = FakeDocument::new(vec![bare.clone(), footer.clone()]);

    assert_eq!(mark_active_nav(&doc, &config, "/reports"), 0);
    assert!(!bare.has_class("active"));
    assert!(!footer.has_class("active"));
}

#[test]
fn mark_active_nav_is_idempotent() {
    let config = GlueConfig::default();
    let reports = FakeElement::with_href(&["nav-item"], "/reports");
    let doc = FakeDocument::new(vec![reports.clone()]);

    mark_active_nav(&doc, &config, "/reports");
    mark_active_nav(&doc, &config, "/reports");
    assert_eq!(reports.class_count("active"), 1);
}
