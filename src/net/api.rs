//! JSON request helper for page scripts.
//!
//! Every page talks to the server through [`ApiClient::api_call`]: one
//! attempt, `Content-Type: application/json` by default, body parsed as
//! JSON on a `2xx`.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and parse failures are each reported once through the
//! client's [`NotificationSink`] and then returned to the caller unchanged.
//! Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{ApiRequest, ApiResponse, RequestOptions, ScriptOptions};
use crate::config::DEFAULT_CONTENT_TYPE;
use crate::date::format_date_dmy;
use crate::error::ApiError;
use crate::notify::{NotificationSink, show_error};

const CONTENT_TYPE: &str = "Content-Type";

/// Sends a resolved request and returns the raw response.
///
/// Futures need not be `Send`; the glue runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        (**self).send(request).await
    }
}

fn hebrew_date_endpoint<D: chrono::Datelike>(date: &D) -> String {
    format!("/api/date/hebrew?date={}", format_date_dmy(date))
}

/// Layer `options` over the default content type.
///
/// A caller header whose name matches an existing one (ignoring case)
/// replaces it; new names are appended.
#[must_use]
pub fn build_request(endpoint: &str, options: RequestOptions, content_type: &str) -> ApiRequest {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), content_type.to_owned())];
    for (name, value) in options.headers {
        match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(slot) => *slot = (name, value),
            None => headers.push((name, value)),
        }
    }
    ApiRequest {
        url: endpoint.to_owned(),
        method: options.method,
        headers,
        body: options.body,
        credentials: options.credentials,
        fetch: options.fetch,
    }
}

/// JSON API client bound to a transport and a notification sink.
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    sink: S,
    content_type: String,
}

impl<T: Transport, S: NotificationSink> ApiClient<T, S> {
    pub fn new(transport: T, sink: S) -> Self {
        Self { transport, sink, content_type: DEFAULT_CONTENT_TYPE.to_owned() }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Request `endpoint` and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or
    /// malformed JSON, after reporting it through the sink.
    pub async fn api_call(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        self.api_call_as(endpoint, options).await
    }

    /// Like [`ApiClient::api_call`], deserializing into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::api_call`]; a body of the wrong shape is a parse failure.
    pub async fn api_call_as<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        match self.execute(endpoint, options).await {
            Ok(value) => Ok(value),
            Err(e) => self.fail(e),
        }
    }

    /// [`ApiClient::api_call`] for an options object written by a page
    /// script, given as its JSON text (`None` when the script passed none).
    ///
    /// # Errors
    ///
    /// As [`ApiClient::api_call`]; malformed or unsupported options fail the
    /// same way, before any request is sent.
    pub async fn api_call_script(&self, endpoint: &str, options_json: Option<&str>) -> Result<Value, ApiError> {
        let options = match options_json {
            None => Ok(RequestOptions::new()),
            Some(raw) => serde_json::from_str::<ScriptOptions>(raw)
                .map_err(ApiError::from)
                .and_then(ScriptOptions::into_options),
        };
        match options {
            Ok(options) => self.api_call(endpoint, options).await,
            Err(e) => self.fail(e),
        }
    }

    /// Report `e` through the sink and return it.
    ///
    /// # Errors
    ///
    /// Always returns `Err(e)`.
    pub fn fail<R>(&self, e: ApiError) -> Result<R, ApiError> {
        show_error(&self.sink, &e.to_string());
        Err(e)
    }

    async fn execute<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<R, ApiError> {
        let request = build_request(endpoint, options, &self.content_type);
        log::debug!("api {} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status { status: response.status, status_text: response.status_text });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetch the Hebrew rendering of `date` via `GET /api/date/hebrew`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::api_call`].
    pub async fn fetch_hebrew_date<D: chrono::Datelike>(&self, date: &D) -> Result<String, ApiError> {
        #[derive(Deserialize)]
        struct HebrewDateResponse {
            hebrew: String,
        }
        let body: HebrewDateResponse = self.api_call_as(&hebrew_date_endpoint(date), RequestOptions::new()).await?;
        Ok(body.hebrew)
    }
}
