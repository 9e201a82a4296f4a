//! User-facing notifications.
//!
//! - `show_toast`: a transient, non-blocking message at the bottom of the
//!   screen, used for success feedback such as "Course saved".
//! - `show_alert`: a blocking browser alert, used when reference data fails
//!   to load and the page cannot leave its loading state.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api::ApiError;

const TOAST_MILLIS: u32 = 3000;
const TOAST_BACKGROUND: &str = "#2e7d32";

/// Inline style of a toast, pinned to the bottom centre of the viewport.
fn toast_style(background: &'static str) -> [(&'static str, &'static str); 9] {
    [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", background),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ]
}

/// Appends a styled `div` to the body and removes it after a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in toast_style(TOAST_BACKGROUND) {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}

pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Logs a failed reference-data load and tells the user with a blocking
/// alert. The failed load is not retried.
pub fn report_load_failure(what: &str, err: &ApiError) {
    gloo_console::error!(format!("loading {} failed: {}", what, err));
    show_alert(&format!("Loading {} failed: {}", what, err));
}
