//! Browser entry point and script-facing exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the WASM module is instantiated: it installs logging,
//! reads the optional `#glue-config` block, wires the click/keydown
//! listeners, and runs page init once the DOM is parsed. Inline template
//! scripts reach the helpers through the generated module's exports
//! (`apiCall`, `showError`, `showSuccess`, `confirmAction`, `formatDate`).
//!
//! ERROR HANDLING
//! ==============
//! A missing window/document makes every entry point a logged no-op; JS
//! exceptions are converted to strings at this boundary.

use std::cell::OnceCell;
use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use crate::config::{CONFIG_ELEMENT_ID, GlueConfig};
use crate::confirm::{Confirmer, confirm_action};
use crate::date::format_date;
use crate::dom::modal::{dismiss_on_click, dismiss_on_key};
use crate::dom::{PageDocument, PageElement};
use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::gloo::GlooTransport;
use crate::notify::{LogSink, show_error, show_success};
use crate::page::init_page;

thread_local! {
    static CONFIG: OnceCell<Rc<GlueConfig>> = const { OnceCell::new() };
}

fn config() -> Rc<GlueConfig> {
    CONFIG.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(GlueConfig::default()))))
}

impl PageElement for Element {
    fn is_same(&self, other: &Self) -> bool {
        self.is_same_node(Some(other))
    }

    fn hide(&self) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            if el.style().set_property("display", "none").is_err() {
                log::warn!("failed to hide <{}>", self.tag_name());
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn add_class(&self, class: &str) {
        if self.class_list().add_1(class).is_err() {
            log::warn!("failed to add class {class:?}");
        }
    }
}

impl PageDocument for Document {
    type Element = Element;

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.query_selector_all(selector) else {
            log::warn!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

/// `window.confirm`, answering "no" if the platform call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirmer for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Client used by the script exports.
pub fn default_client() -> ApiClient<GlooTransport, LogSink> {
    ApiClient::new(GlooTransport, LogSink).with_content_type(config().content_type.clone())
}

fn read_config(document: &Document) -> GlueConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    GlueConfig::from_json_or_default(raw.as_deref())
}

fn current_path(window: &Window) -> String {
    window.location().pathname().unwrap_or_else(|_| "/".to_owned())
}

fn install_listeners(window: &Window, document: &Document) {
    let doc = document.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        let hidden = dismiss_on_click(&doc, &config(), target.as_ref());
        if hidden > 0 {
            log::debug!("closed {hidden} modal(s) on backdrop click");
        }
    });
    if window
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to install modal click listener");
    }
    // Listeners live for the whole page.
    on_click.forget();

    let doc = document.clone();
    let on_keydown = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let hidden = dismiss_on_key(&doc, &config(), &key);
        if hidden > 0 {
            log::debug!("closed {hidden} modal(s) on {key}");
        }
    });
    if document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to install modal keydown listener");
    }
    on_keydown.forget();
}

fn schedule_page_init(window: &Window, document: &Document) {
    let win = window.clone();
    let doc = document.clone();
    let run = move || {
        init_page(&doc, &config(), &current_path(&win));
    };
    if document.ready_state() != "loading" {
        run();
        return;
    }
    let on_ready = Closure::once(run);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to install DOMContentLoaded listener");
    }
    on_ready.forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let loaded = read_config(&document);
    let _ = console_log::init_with_level(loaded.log_level.to_level());
    CONFIG.with(|cell| {
        let _ = cell.set(Rc::new(loaded));
    });

    install_listeners(&window, &document);
    schedule_page_init(&window, &document);
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// `await apiCall(endpoint, { method, headers, body, credentials, cache, ... })`
///
/// # Errors
///
/// Rejects with an `Error` whose message matches the error notification.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call_js(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let client = default_client();
    let result = if options.is_undefined() || options.is_null() {
        client.api_call_script(&endpoint, None).await
    } else {
        match js_sys::JSON::stringify(&options) {
            Ok(raw) => client.api_call_script(&endpoint, Some(&String::from(raw))).await,
            Err(_) => client.fail(ApiError::Transport("request options are not serializable".to_owned())),
        }
    };
    let value = result.map_err(|e| js_error(&e.to_string()))?;
    js_sys::JSON::parse(&value.to_string()).map_err(|_| js_error("response is not representable in JS"))
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error_js(message: &str) {
    show_error(&LogSink, message);
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success_js(message: &str) {
    show_success(&LogSink, message);
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action_js(message: &str) -> bool {
    confirm_action(&BrowserConfirm, message)
}

/// `formatDate(new Date())` → `"2025-01-05"`, using the date's local fields.
///
/// # Errors
///
/// Throws for an invalid `Date`.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(date: &js_sys::Date) -> Result<String, JsValue> {
    let year = date.get_full_year();
    let day = NaiveDate::from_ymd_opt(
        i32::try_from(year).map_err(|_| js_error("invalid date"))?,
        date.get_month() + 1,
        date.get_date(),
    )
    .ok_or_else(|| js_error("invalid date"))?;
    Ok(format_date(&day))
}
