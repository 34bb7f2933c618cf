//! Host-page embedding: mount factory, unmount handle, and JS bindings.
//!
//! DESIGN
//! ======
//! Mounting is an explicit factory call with a config struct — no global
//! registration. The returned handle disposes the Leptos owner on unmount,
//! which invalidates the session signal so an in-flight reply settling
//! afterwards has nothing to write to. Style isolation is an embed-time
//! option; the session core never depends on it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::ChatWidgetRoot;
use crate::config::WidgetConfig;

/// Widget stylesheet injected at mount.
const STYLE_SHEET: &str = include_str!("../assets/widget.css");

/// Handle for one mounted widget. Dropping it unmounts; call [`forget`]
/// to keep the widget alive for the rest of the page lifetime.
///
/// [`forget`]: WidgetHandle::forget
pub struct WidgetHandle {
    settle: Option<Box<dyn FnOnce(bool)>>,
}

impl WidgetHandle {
    /// Unmount the widget and dispose its reactive state.
    pub fn unmount(mut self) {
        self.settle(false);
    }

    /// Keep the widget mounted and discard the handle.
    pub fn forget(mut self) {
        self.settle(true);
    }

    fn settle(&mut self, keep_mounted: bool) {
        if let Some(settle) = self.settle.take() {
            settle(keep_mounted);
        }
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        self.settle(false);
    }
}

/// Mount the widget into `target` and return its lifecycle handle.
///
/// With `style_isolation` set, the widget mounts inside an open shadow
/// root with the stylesheet injected there; otherwise the stylesheet is
/// injected next to the widget in the host document.
#[must_use]
pub fn mount_widget(target: &web_sys::HtmlElement, config: WidgetConfig) -> WidgetHandle {
    init_runtime();

    let host = widget_host(target, config.style_isolation);
    let mount = leptos::mount::mount_to(host, move || view! { <ChatWidgetRoot config/> });
    let settle: Box<dyn FnOnce(bool)> = Box::new(move |keep_mounted| {
        if keep_mounted {
            mount.forget();
        } else {
            drop(mount);
        }
    });
    WidgetHandle { settle: Some(settle) }
}

fn init_runtime() {
    console_error_panic_hook::set_once();
    // Repeat mounts hit the already-set logger; that is fine.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Build the element the widget actually renders into, injecting the
/// stylesheet beside it. Falls back to mounting directly in `target` when
/// DOM setup fails.
fn widget_host(target: &web_sys::HtmlElement, style_isolation: bool) -> web_sys::HtmlElement {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return target.clone();
    };

    let root: web_sys::Node = if style_isolation {
        match target.attach_shadow(&web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open)) {
            Ok(shadow) => shadow.into(),
            Err(_) => {
                log::warn!("shadow root unavailable; mounting without style isolation");
                target.clone().into()
            }
        }
    } else {
        target.clone().into()
    };

    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(STYLE_SHEET));
        let _ = root.append_child(&style);
    }

    let Ok(container) = document.create_element("div") else {
        return target.clone();
    };
    let _ = container.set_attribute("class", "shopchat-host");
    if root.append_child(&container).is_err() {
        return target.clone();
    }
    container.unchecked_into()
}

/// JS-facing handle mirroring [`WidgetHandle`].
#[wasm_bindgen]
pub struct ChatWidgetHandle {
    inner: Option<WidgetHandle>,
}

#[wasm_bindgen]
impl ChatWidgetHandle {
    /// Tear the widget down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.inner.take() {
            handle.unmount();
        }
    }
}

/// Mount the widget for a JS host page.
///
/// `backend_url` falls back to same-origin; `style_isolation` defaults to
/// rendering directly into the host page.
#[wasm_bindgen(js_name = mountChatWidget)]
#[must_use]
pub fn mount_chat_widget(
    target: web_sys::HtmlElement,
    backend_url: Option<String>,
    style_isolation: Option<bool>,
) -> ChatWidgetHandle {
    let mut config = WidgetConfig::default();
    if let Some(backend_url) = backend_url {
        config.backend_url = backend_url;
    }
    if let Some(style_isolation) = style_isolation {
        config.style_isolation = style_isolation;
    }
    ChatWidgetHandle {
        inner: Some(mount_widget(&target, config)),
    }
}
