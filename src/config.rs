//! Page glue configuration.
//!
//! Defaults match the markup the server templates render. A page can
//! override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="glue-config">{"log_level": "debug"}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_MODAL_CLASS: &str = "modal";
pub const DEFAULT_NAV_ITEM_CLASS: &str = "nav-item";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_DISMISS_KEY: &str = "Escape";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const CONFIG_ELEMENT_ID: &str = "glue-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlueConfig {
    /// Class marking dismissible overlays.
    pub modal_class: String,
    /// Class marking navigation links.
    pub nav_item_class: String,
    /// Class added to the nav item matching the current path.
    pub active_class: String,
    /// `KeyboardEvent.key` value that closes every modal.
    pub dismiss_key: String,
    /// Target treated as equivalent to the site root.
    pub dashboard_path: String,
    /// Default `Content-Type` for `api_call` requests.
    pub content_type: String,
    pub log_level: LogLevel,
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            modal_class: DEFAULT_MODAL_CLASS.to_owned(),
            nav_item_class: DEFAULT_NAV_ITEM_CLASS.to_owned(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
            dismiss_key: DEFAULT_DISMISS_KEY.to_owned(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl GlueConfig {
    /// Parse an override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of known shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Like [`GlueConfig::from_json`], but falls back to defaults on bad input.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID} block: {e}");
                Self::default()
            }
        }
    }

    /// CSS selector for modal elements.
    #[must_use]
    pub fn modal_selector(&self) -> String {
        format!(".{}", self.modal_class)
    }

    /// CSS selector for nav items.
    #[must_use]
    pub fn nav_item_selector(&self) -> String {
        format!(".{}", self.nav_item_class)
    }
}
