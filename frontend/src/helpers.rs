//! Browser utilities shared by the components: toast notifications and
//! navigation.

use common::nav::Location;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast removes itself after a few seconds. Used for every transient
/// failure (list fetch, update, field creation) and for confirmations.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name(match kind {
        ToastKind::Info => "toast",
        ToastKind::Error => "toast error",
    });
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

pub fn toast_error(message: &str) {
    gloo_console::error!(message);
    show_toast(message, ToastKind::Error);
}

/// Full page navigation; server routes are rendered by the backend.
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(href).is_err() {
            gloo_console::error!(format!("navigation to {} failed", href));
        }
    }
}

/// Navigation state of the current URL.
pub fn current_location() -> Location {
    let location = web_sys::window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    let query = location
        .as_ref()
        .and_then(|l| l.search().ok())
        .unwrap_or_default();
    Location::parse(&path, &query)
}
