//! # yeshiva-glue
//!
//! Page glue for the server-rendered Yeshiva Management System, built to
//! WASM for the browser. It closes modals on backdrop click or Escape,
//! marks the active nav item, formats dates, wraps JSON `fetch` calls, and
//! surfaces notifications and confirmations.
//!
//! Behavior is written against small traits (`dom::PageDocument`,
//! `net::api::Transport`, `notify::NotificationSink`, `confirm::Confirmer`)
//! and unit tested natively; the `browser` feature adds the web-sys/gloo
//! implementations and the script exports.

pub mod config;
pub mod confirm;
pub mod date;
pub mod dom;
pub mod error;
pub mod net;
pub mod notify;
pub mod page;

#[cfg(feature = "browser")]
pub mod browser;

pub use confirm::{Confirmer, confirm_action};
pub use date::{format_date, format_hebrew_date};
pub use error::ApiError;
pub use net::api::ApiClient;
pub use notify::{NotificationSink, Severity, show_error, show_notification, show_success};
