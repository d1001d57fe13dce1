//! Request/response shapes exchanged with a [`super::api::Transport`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// HTTP method. `fetch` defaults to `GET`.
///
/// Standard names are normalized to upper case; any other valid token is
/// sent exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Other(String),
}

/// RFC 9110 `tchar`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

impl Method {
    /// Parse a `fetch` method name. Returns `None` for an empty or
    /// non-token string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.chars().all(is_token_char) {
            return None;
        }
        let method = match raw.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "OPTIONS" => Self::Options,
            _ => Self::Other(raw.to_owned()),
        };
        Some(method)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Other(raw) => raw,
        }
    }
}

/// `fetch` credentials mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

impl Credentials {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "omit" => Some(Self::Omit),
            "same-origin" => Some(Self::SameOrigin),
            "include" => Some(Self::Include),
            _ => None,
        }
    }
}

const CACHE_MODES: &[&str] = &["default", "no-store", "reload", "no-cache", "force-cache", "only-if-cached"];
const REQUEST_MODES: &[&str] = &["same-origin", "no-cors", "cors", "navigate"];
const REDIRECT_MODES: &[&str] = &["follow", "error", "manual"];
const REFERRER_POLICIES: &[&str] = &[
    "",
    "no-referrer",
    "no-referrer-when-downgrade",
    "origin",
    "origin-when-cross-origin",
    "unsafe-url",
    "same-origin",
    "strict-origin",
    "strict-origin-when-cross-origin",
];

/// Remaining `fetch` init members, carried verbatim to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub cache: Option<String>,
    pub mode: Option<String>,
    pub redirect: Option<String>,
    pub referrer: Option<String>,
    pub referrer_policy: Option<String>,
    pub integrity: Option<String>,
}

fn check_enum(option: &str, value: Option<&String>, allowed: &[&str]) -> Result<(), ApiError> {
    match value {
        Some(v) if !allowed.contains(&v.as_str()) => {
            Err(ApiError::Transport(format!("unsupported {option}: {v}")))
        }
        _ => Ok(()),
    }
}

impl FetchOptions {
    /// Reject enum values `fetch` itself would throw on.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] naming the first bad option.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_enum("cache mode", self.cache.as_ref(), CACHE_MODES)?;
        check_enum("request mode", self.mode.as_ref(), REQUEST_MODES)?;
        check_enum("redirect mode", self.redirect.as_ref(), REDIRECT_MODES)?;
        check_enum("referrer policy", self.referrer_policy.as_ref(), REFERRER_POLICIES)
    }
}

/// Header value as `fetch` stringifies it (`String(value)`).
fn header_value(value: serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => header_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
        other => other.to_string(),
    }
}

/// Per-call options. Headers are layered over the JSON default; everything
/// else goes to the transport as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
    pub fetch: FetchOptions,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `value` cannot be serialized.
    pub fn json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(value)?;
        Ok(self.body(raw))
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn fetch(mut self, fetch: FetchOptions) -> Self {
        self.fetch = fetch;
        self
    }
}

/// Options object as passed from inline page scripts, using `fetch`'s
/// init member names. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptOptions {
    pub method: Option<String>,
    pub headers: std::collections::BTreeMap<String, serde_json::Value>,
    pub body: Option<serde_json::Value>,
    pub credentials: Option<String>,
    pub cache: Option<String>,
    pub mode: Option<String>,
    pub redirect: Option<String>,
    pub referrer: Option<String>,
    pub referrer_policy: Option<String>,
    pub integrity: Option<String>,
}

impl ScriptOptions {
    /// Convert to [`RequestOptions`]. A non-string body is sent as its JSON
    /// text; header values are stringified.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] for an invalid method, credentials
    /// mode or other enumerated `fetch` option.
    pub fn into_options(self) -> Result<RequestOptions, ApiError> {
        let mut options = RequestOptions::new();
        if let Some(raw) = self.method {
            options.method = Method::parse(&raw).ok_or_else(|| ApiError::Transport(format!("unsupported method: {raw}")))?;
        }
        options.headers = self.headers.into_iter().map(|(k, v)| (k, header_value(v))).collect();
        options.body = match self.body {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        if let Some(raw) = self.credentials {
            options.credentials = Some(
                Credentials::parse(&raw).ok_or_else(|| ApiError::Transport(format!("unsupported credentials mode: {raw}")))?,
            );
        }
        options.fetch = FetchOptions {
            cache: self.cache,
            mode: self.mode,
            redirect: self.redirect,
            referrer: self.referrer,
            referrer_policy: self.referrer_policy,
            integrity: self.integrity,
        };
        options.fetch.validate()?;
        Ok(options)
    }
}

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Option<Credentials>,
    pub fetch: FetchOptions,
}

impl ApiRequest {
    /// First header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    /// Same rule as `Response.ok`: status in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
