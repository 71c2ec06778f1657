//! Browser implementations of the typing driver's collaborators

use web_sys::Element;

use crate::typing::{Scheduler, TextSurface};
use crate::wasm_warn;

/// Writes typed text into an element's `textContent`
pub struct ElementSurface {
    element: Element,
}

impl ElementSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl TextSurface for ElementSurface {
    fn write(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Schedules callbacks with `window.setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        if let Err(e) = super::set_timeout(delay_ms, move || callback()) {
            wasm_warn!("typing step not scheduled: {}", e);
        }
    }
}
