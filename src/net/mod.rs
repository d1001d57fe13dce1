//! Networking for page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single JSON request chokepoint, `types` holds the request and
//! response shapes the [`api::Transport`] trait exchanges, and `gloo` is the
//! browser transport.

pub mod api;
#[cfg(feature = "browser")]
pub mod gloo;
pub mod types;
