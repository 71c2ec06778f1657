//! Project detail modal
//!
//! Clicking a `[data-project]` card fills the modal from the card's JSON and
//! opens it. The modal closes on any `[data-close]` element, on a click on
//! the backdrop (the modal element itself) and on Escape.
//!
//! Expected modal markup (ids/classes are the page's choice):
//!
//! ```html
//! <div id="projectModal" aria-hidden="true">
//!   <div class="modal-content">
//!     <button data-close>×</button>
//!     <img data-field="image">
//!     <h3 data-field="title"></h3>
//!     <p data-field="description"></p>
//!     <ul data-field="tags"></ul>
//!     <a data-field="link" target="_blank" rel="noopener">View project</a>
//!   </div>
//! </div>
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::dom;
use crate::errors::SiteResult;
use crate::models::ProjectDetail;
use crate::wasm_warn;

const CARD_SELECTOR: &str = "[data-project]";

pub fn bind(doc: &Document, modal_id: &str) -> SiteResult<usize> {
    let modal = dom::by_id(doc, modal_id)?;
    let cards = super::require_any(dom::query_all(doc, CARD_SELECTOR), CARD_SELECTOR)?;
    let count = cards.len();

    for card in cards {
        let modal = modal.clone();
        let source = card.clone();
        dom::listen(&card, "click", move |_| {
            let raw = source.get_attribute("data-project").unwrap_or_default();
            match ProjectDetail::from_attribute(&raw) {
                Ok(detail) => open(&modal, &detail),
                Err(e) => wasm_warn!("project card ignored: {}", e),
            }
        })?;
    }

    for closer in dom::query_all_in(&modal, "[data-close]") {
        let modal = modal.clone();
        dom::listen(&closer, "click", move |_| close(&modal))?;
    }

    {
        let backdrop = modal.clone();
        dom::listen(&modal, "click", move |event| {
            let on_backdrop = event
                .target()
                .map_or(false, |t| JsValue::from(t) == JsValue::from(backdrop.clone()));
            if on_backdrop {
                close(&backdrop);
            }
        })?;
    }

    {
        let modal = modal.clone();
        dom::listen(doc, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |k| k.key() == "Escape");
            if escape && is_open(&modal) {
                close(&modal);
            }
        })?;
    }

    Ok(count)
}

pub fn is_open(modal: &Element) -> bool {
    modal.class_list().contains("open")
}

pub fn open(modal: &Element, detail: &ProjectDetail) {
    set_field_text(modal, "title", &detail.title);
    set_field_text(modal, "description", &detail.description);
    fill_tags(modal, &detail.tags);

    if let Some(link) = dom::query_in(modal, "[data-field='link']") {
        match detail.safe_link() {
            Some(href) => {
                let _ = link.set_attribute("href", href);
                let _ = link.remove_attribute("hidden");
            }
            None => {
                let _ = link.set_attribute("hidden", "");
            }
        }
    }

    if let Some(image) = dom::query_in(modal, "[data-field='image']") {
        match &detail.image {
            Some(src) => {
                let _ = image.set_attribute("src", src);
                let _ = image.set_attribute("alt", &detail.title);
                let _ = image.remove_attribute("hidden");
            }
            None => {
                let _ = image.set_attribute("hidden", "");
            }
        }
    }

    dom::add_class(modal, "open");
    let _ = modal.set_attribute("aria-hidden", "false");
    lock_body_scroll(true);
}

pub fn close(modal: &Element) {
    dom::remove_class(modal, "open");
    let _ = modal.set_attribute("aria-hidden", "true");
    lock_body_scroll(false);
}

fn set_field_text(modal: &Element, field: &str, text: &str) {
    if let Some(el) = dom::query_in(modal, &format!("[data-field='{}']", field)) {
        el.set_text_content(Some(text));
    }
}

fn fill_tags(modal: &Element, tags: &[String]) {
    let Some(list) = dom::query_in(modal, "[data-field='tags']") else {
        return;
    };
    let Ok(doc) = dom::document() else {
        return;
    };

    list.set_text_content(None);
    for tag in tags {
        if let Ok(item) = doc.create_element("li") {
            item.set_text_content(Some(tag));
            let _ = list.append_child(&item);
        }
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = dom::document().ok().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}
