//! Animated statistic counters
//!
//! `[data-count]` elements count up from zero the first time they come into
//! view. `data-suffix` is appended to every frame (e.g. `+`, `%`).

use web_sys::{Document, Element};

use crate::dom;
use crate::errors::SiteResult;
use crate::motion::CounterAnimation;
use crate::wasm_warn;

use super::reveal::observe_once;

const COUNTER_SELECTOR: &str = "[data-count]";

pub fn bind(doc: &Document, threshold: f64, duration_ms: f64) -> SiteResult<usize> {
    let counters = super::require_any(dom::query_all(doc, COUNTER_SELECTOR), COUNTER_SELECTOR)?;
    let count = counters.len();
    let reduced_motion = dom::prefers_reduced_motion();

    observe_once(counters, threshold, move |el| {
        let raw = el.get_attribute("data-count").unwrap_or_default();
        let Some(animation) = CounterAnimation::from_attribute(&raw, duration_ms) else {
            wasm_warn!("ignoring counter with data-count='{}'", raw);
            return;
        };
        let suffix = el.get_attribute("data-suffix").unwrap_or_default();

        if reduced_motion {
            el.set_text_content(Some(&animation.format(animation.target(), &suffix)));
        } else {
            run_frames(el, animation, suffix);
        }
    })?;
    Ok(count)
}

fn run_frames(el: Element, animation: CounterAnimation, suffix: String) {
    let scheduled = dom::request_animation_frame(move |timestamp| {
        let mut animation = animation;
        let frame = animation.frame(timestamp);
        el.set_text_content(Some(&animation.format(frame.value, &suffix)));
        if !frame.done {
            run_frames(el, animation, suffix);
        }
    });
    if let Err(e) = scheduled {
        wasm_warn!("counter frame not scheduled: {}", e);
    }
}
