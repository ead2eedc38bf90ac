//! Browser helpers shared by the pages: toasts, navigation, the session
//! store and small request wrappers around `gloo_net`.

use gloo_net::http::{Request, Response};
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, RequestCredentials};

use common::requests::ErrorResponse;
use common::routes::Route;

pub const DEFAULT_TOAST_MS: u32 = 3000;

/// Session entry holding the signed-in associate.
pub const ASSOCIATE_SESSION_KEY: &str = "associate";

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Success => "#15803d",
            ToastKind::Error => "#b91c1c",
        }
    }
}

/// Shows a transient notification at the bottom of the page for
/// `duration_ms` milliseconds.
pub fn show_toast(message: &str, kind: ToastKind, duration_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn toast_error(message: &str) {
    show_toast(message, ToastKind::Error, DEFAULT_TOAST_MS);
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full-page navigation to `route`.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(route.path()).is_err() {
            log::warn!("navigation to {} failed", route);
        }
    }
}

pub fn go_back() {
    if let Some(Err(err)) = web_sys::window().and_then(|w| w.history().ok()).map(|h| h.back()) {
        log::warn!("history.back failed: {:?}", err);
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn session_get(key: &str) -> Option<Value> {
    let raw = session_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn session_set(key: &str, value: &Value) {
    if let Some(storage) = session_storage() {
        if storage.set_item(key, &value.to_string()).is_err() {
            log::warn!("could not store {} in the session", key);
        }
    }
}

pub fn session_remove(key: &str) {
    if let Some(storage) = session_storage() {
        storage.remove_item(key).ok();
    }
}

/// Error text of a failed response: its `message` field when present,
/// otherwise the status line.
pub async fn failure_message(response: Response) -> String {
    let status = format!("{} {}", response.status(), response.status_text());
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            message: Some(message),
        }) if !message.is_empty() => message,
        _ => status,
    }
}

/// GET `url` and decode any JSON body.
pub async fn get_json(url: &str) -> Result<Value, String> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(failure_message(response).await);
    }
    response.json::<Value>().await.map_err(|err| err.to_string())
}

/// POST `body` as JSON to `url`. A `None` body sends an empty request.
pub async fn post_json(url: &str, body: Option<&Value>) -> Result<Value, String> {
    let builder = Request::post(url).credentials(RequestCredentials::Include);
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|err| err.to_string())?;

    let response = request.send().await.map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(failure_message(response).await);
    }
    Ok(response.json::<Value>().await.unwrap_or(Value::Null))
}
