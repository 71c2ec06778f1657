//! Toast banner for short status messages

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::dom;
use crate::errors::SiteResult;
use crate::motion::ToastState;
use crate::wasm_warn;

#[derive(Clone)]
pub struct Toast {
    element: Element,
    duration_ms: u32,
    state: Rc<RefCell<ToastState>>,
}

impl Toast {
    pub fn bind(doc: &Document, toast_id: &str, duration_ms: u32) -> SiteResult<Self> {
        let element = dom::by_id(doc, toast_id)?;
        let _ = element.set_attribute("role", "status");
        let _ = element.set_attribute("aria-live", "polite");
        Ok(Self {
            element,
            duration_ms,
            state: Rc::new(RefCell::new(ToastState::new())),
        })
    }

    /// Show `message`, replacing any toast currently on screen
    pub fn show(&self, message: &str) {
        self.element.set_text_content(Some(message));
        dom::add_class(&self.element, "show");

        let token = self.state.borrow_mut().show();
        let element = self.element.clone();
        let state = Rc::clone(&self.state);
        let hide = dom::set_timeout(self.duration_ms, move || {
            if state.borrow_mut().hide(token) {
                dom::remove_class(&element, "show");
            }
        });
        if let Err(e) = hide {
            wasm_warn!("toast hide timer failed: {}", e);
        }
    }
}
