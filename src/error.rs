//! Error types surfaced by the glue layer.
//!
//! ERROR HANDLING
//! ==============
//! Every failure inside `api_call` collapses into one [`ApiError`] so the
//! notification path can report it once and hand it back unchanged.

/// Failure returned by [`crate::net::api::ApiClient::api_call`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("API Error: {status_text}")]
    Status { status: u16, status_text: String },
    /// The response body was not valid JSON for the requested shape.
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Parse(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Failure returned by [`crate::date::parse_date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    Invalid { input: String },
}
