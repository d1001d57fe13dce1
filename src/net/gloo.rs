//! Browser transport backed by `gloo-net` (`fetch`).

use gloo_net::http::RequestBuilder;
use wasm_bindgen::JsValue;
use web_sys::{ReferrerPolicy, RequestCache, RequestMode, RequestRedirect};

use super::api::Transport;
use super::types::{ApiRequest, ApiResponse, Credentials, FetchOptions};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl From<Credentials> for web_sys::RequestCredentials {
    fn from(value: Credentials) -> Self {
        match value {
            Credentials::Omit => Self::Omit,
            Credentials::SameOrigin => Self::SameOrigin,
            Credentials::Include => Self::Include,
        }
    }
}

/// Map a `fetch` enum string onto its web-sys binding.
fn web_enum<T>(option: &str, raw: &str, parse: fn(&JsValue) -> Option<T>) -> Result<T, ApiError> {
    parse(&JsValue::from_str(raw)).ok_or_else(|| ApiError::Transport(format!("unsupported {option}: {raw}")))
}

fn apply_fetch_options(mut builder: RequestBuilder, fetch: &FetchOptions) -> Result<RequestBuilder, ApiError> {
    if let Some(raw) = &fetch.cache {
        builder = builder.cache(web_enum("cache mode", raw, RequestCache::from_js_value)?);
    }
    if let Some(raw) = &fetch.mode {
        builder = builder.mode(web_enum("request mode", raw, RequestMode::from_js_value)?);
    }
    if let Some(raw) = &fetch.redirect {
        builder = builder.redirect(web_enum("redirect mode", raw, RequestRedirect::from_js_value)?);
    }
    if let Some(raw) = &fetch.referrer {
        builder = builder.referrer(raw);
    }
    if let Some(raw) = &fetch.referrer_policy {
        builder = builder.referrer_policy(web_enum("referrer policy", raw, ReferrerPolicy::from_js_value)?);
    }
    if let Some(raw) = &fetch.integrity {
        builder = builder.integrity(raw);
    }
    Ok(builder)
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = gloo_net::http::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(credentials) = request.credentials {
            builder = builder.credentials(credentials.into());
        }
        builder = apply_fetch_options(builder, &request.fetch)?;
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        // Error bodies are never parsed, so skip reading them.
        let body = if resp.ok() {
            resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?
        } else {
            String::new()
        };
        Ok(ApiResponse { status: resp.status(), status_text: resp.status_text(), body })
    }
}
