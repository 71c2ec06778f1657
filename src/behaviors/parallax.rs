//! Parallax layers
//!
//! `[data-parallax]` elements move at a fraction of the scroll speed. Users
//! who ask for reduced motion get static layers.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::errors::SiteResult;
use crate::motion::{parallax_speed, parallax_transform};

const PARALLAX_SELECTOR: &str = "[data-parallax]";

pub fn bind(doc: &Document) -> SiteResult<usize> {
    let layers: Vec<(HtmlElement, f64)> = dom::query_all(doc, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let speed = parallax_speed(el.get_attribute("data-parallax").as_deref());
            el.dyn_into::<HtmlElement>().ok().map(|html| (html, speed))
        })
        .collect();
    let layers = super::require_any(layers, PARALLAX_SELECTOR)?;

    if dom::prefers_reduced_motion() {
        return Ok(0);
    }

    let count = layers.len();
    super::on_scroll(move |scroll_y| {
        for (layer, speed) in &layers {
            let _ = layer
                .style()
                .set_property("transform", &parallax_transform(scroll_y, *speed));
        }
    })?;
    Ok(count)
}
