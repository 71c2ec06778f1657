//! Copy-to-clipboard buttons
//!
//! Elements with `data-copy="<text>"` copy their text on click. The async
//! Clipboard API is tried first; when it is missing or rejects (insecure
//! context, denied permission) a hidden textarea + `execCommand("copy")`
//! is used instead.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use super::toast::Toast;
use crate::api::helpers::is_absent;
use crate::dom;
use crate::errors::SiteResult;
use crate::wasm_log;

const COPY_SELECTOR: &str = "[data-copy]";
const COPIED_MESSAGE: &str = "Copied to clipboard";
const FAILED_MESSAGE: &str = "Copy failed";

pub fn bind(doc: &Document, toast: Option<Toast>) -> SiteResult<usize> {
    let buttons = super::require_any(dom::query_all(doc, COPY_SELECTOR), COPY_SELECTOR)?;
    let count = buttons.len();

    for button in buttons {
        let toast = toast.clone();
        let source = button.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            let Some(text) = source.get_attribute("data-copy") else {
                return;
            };
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let copied = copy_text(&text).await;
                wasm_log!("copy {} chars: {}", text.chars().count(), copied);
                if let Some(toast) = toast {
                    toast.show(if copied { COPIED_MESSAGE } else { FAILED_MESSAGE });
                }
            });
        })?;
    }
    Ok(count)
}

/// Copy `text`, trying the Clipboard API before the execCommand fallback
pub async fn copy_text(text: &str) -> bool {
    if let Some(promise) = clipboard_write_text(text) {
        if JsFuture::from(promise).await.is_ok() {
            return true;
        }
    }
    fallback_copy(text)
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically so that
/// browsers without the API fall through to the fallback
fn clipboard_write_text(text: &str) -> Option<js_sys::Promise> {
    let navigator = web_sys::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if is_absent(&clipboard) {
        return None;
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<js_sys::Promise>()
        .ok()
}

/// Copy through a temporary off-screen textarea and `execCommand("copy")`
pub fn fallback_copy(text: &str) -> bool {
    let Ok(doc) = dom::document() else {
        return false;
    };
    let Some(body) = doc.body() else {
        return false;
    };
    let Ok(area) = doc
        .create_element("textarea")
        .map(|el| el.unchecked_into::<HtmlTextAreaElement>())
    else {
        return false;
    };

    area.set_value(text);
    let _ = area.set_attribute("readonly", "");
    let style = area.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "-1000px");
    let _ = style.set_property("opacity", "0");

    if body.append_child(&area).is_err() {
        return false;
    }
    area.select();
    let copied = doc
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    area.remove();
    copied
}
