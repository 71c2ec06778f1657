//! Thin wrappers over web-sys used by every behavior
//!
//! Lookups return `SiteError::MissingElement` so callers can skip a
//! behavior with `?`. Event handlers and timers are registered here and
//! live for the rest of the page.

pub mod surface;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, NodeList, Window};

use crate::errors::{SiteError, SiteResult};
use crate::wasm_warn;

pub use surface::{ElementSurface, TimeoutScheduler};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or_else(|| SiteError::Js("window is unavailable".to_string()))
}

pub fn document() -> SiteResult<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::Js("document is unavailable".to_string()))
}

/// Element by id, or `MissingElement`
pub fn by_id(doc: &Document, id: &str) -> SiteResult<Element> {
    doc.get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

/// All elements matching `selector` in the document
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    match doc.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            wasm_warn!("querySelectorAll('{}') failed: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// All elements matching `selector` below `root`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

/// First element matching `selector` below `root`
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str) -> bool {
    el.class_list().toggle(class).unwrap_or(false)
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Register an event handler for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> SiteResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| SiteError::from_js(&format!("addEventListener('{}')", event), &e))?;
    // Handlers are never removed; the closure has to outlive this frame.
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay_ms`
pub fn set_timeout<F>(delay_ms: u32, callback: F) -> SiteResult<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move || callback());
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| SiteError::from_js("setTimeout", &e))
}

/// Run `callback` on the next animation frame with its timestamp
pub fn request_animation_frame<F>(callback: F) -> SiteResult<i32>
where
    F: FnOnce(f64) + 'static,
{
    let callback = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .map_err(|e| SiteError::from_js("requestAnimationFrame", &e))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Distance from the top of the document to the top of `el`
pub fn document_top(el: &Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

/// Whether a media query currently matches (false when unsupported)
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}
