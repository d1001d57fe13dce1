use super::*;

#[test]
fn default_config_matches_template_markup() {
    let config = GlueConfig::default();
    assert_eq!(config.modal_selector(), ".modal");
    assert_eq!(config.nav_item_selector(), ".nav-item");
    assert_eq!(config.active_class, "active");
    assert_eq!(config.dismiss_key, "Escape");
    assert_eq!(config.dashboard_path, "/dashboard");
    assert_eq!(config.content_type, "application/json");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = GlueConfig::from_json(r#"{"active_class":"is-current","log_level":"debug"}"#).unwrap();
    assert_eq!(config.active_class, "is-current");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.modal_class, "modal");
}

#[test]
fn from_json_rejects_unknown_log_level() {
    assert!(GlueConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
}

#[test]
fn from_json_or_default_falls_back_on_missing_or_bad_input() {
    assert_eq!(GlueConfig::from_json_or_default(None), GlueConfig::default());
    assert_eq!(GlueConfig::from_json_or_default(Some("   ")), GlueConfig::default());
    assert_eq!(GlueConfig::from_json_or_default(Some("{not json")), GlueConfig::default());
}

#[test]
fn log_level_maps_to_log_crate_levels() {
    assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
    assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
}
