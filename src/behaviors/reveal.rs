//! Scroll-triggered reveal
//!
//! `.reveal` elements get the `visible` class the first time they scroll
//! into view. Browsers without IntersectionObserver reveal everything up
//! front.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::errors::{SiteError, SiteResult};

const REVEAL_SELECTOR: &str = ".reveal";

pub fn bind(doc: &Document, threshold: f64) -> SiteResult<usize> {
    let elements = super::require_any(dom::query_all(doc, REVEAL_SELECTOR), REVEAL_SELECTOR)?;
    let count = elements.len();

    observe_once(elements, threshold, |el| dom::add_class(&el, "visible"))?;
    Ok(count)
}

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Call `on_visible` once per element, the first time it intersects the
/// viewport by at least `threshold`. Without IntersectionObserver support
/// every element is handled immediately.
pub fn observe_once<F>(elements: Vec<Element>, threshold: f64, mut on_visible: F) -> SiteResult<()>
where
    F: FnMut(Element) + 'static,
{
    if !intersection_observer_supported() {
        for el in elements {
            on_visible(el);
        }
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| SiteError::from_js("IntersectionObserver", &e))?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}
