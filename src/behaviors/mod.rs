//! Page behaviors
//!
//! Each submodule binds one independent behavior to the page. A behavior
//! whose elements are missing is skipped; `mount` records what was bound
//! and what was skipped so the page can inspect it from the console.

pub mod back_to_top;
pub mod clipboard;
pub mod contact;
pub mod counters;
pub mod footer;
pub mod modal;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scrollspy;
pub mod theme;
pub mod toast;
pub mod typed;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use web_sys::Document;

use crate::dom;
use crate::errors::{SiteError, SiteResult};
use crate::models::SiteConfig;
use crate::{wasm_info, wasm_log};

/// Report name of the typed hero text; its skip is logged at info level
const TYPED: &str = "typed";

/// Which behaviors were bound by `mount`
#[derive(Debug, Default, Clone, Serialize)]
pub struct MountReport {
    pub bound: Vec<&'static str>,
    pub skipped: Vec<SkippedBehavior>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedBehavior {
    pub name: &'static str,
    pub reason: String,
}

impl MountReport {
    fn record<T>(&mut self, name: &'static str, result: SiteResult<T>) {
        match result {
            Ok(_) => self.bound.push(name),
            Err(e) => {
                if name == TYPED {
                    wasm_info!("{} not bound: {}", name, e);
                } else {
                    wasm_log!("{} not bound: {}", name, e);
                }
                self.skipped.push(SkippedBehavior {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Bind every behavior to the page
pub fn mount(doc: &Document, config: &SiteConfig) -> MountReport {
    let mut report = MountReport::default();
    let ids = &config.ids;

    report.record("theme", theme::init(doc, &ids.theme_toggle, &config.theme_storage_key));
    report.record("nav", nav::bind(doc, ids));
    report.record("reveal", reveal::bind(doc, config.reveal_threshold));
    report.record("year", footer::bind(doc, &ids.year));
    report.record(TYPED, typed::bind(doc, &ids.typed, &config.typing));
    report.record("parallax", parallax::bind(doc));
    report.record("scrollspy", scrollspy::bind(doc, &ids.nav, config.scrollspy_offset));
    report.record(
        "backToTop",
        back_to_top::bind(doc, &ids.back_to_top, config.back_to_top_threshold),
    );

    let toast = toast::Toast::bind(doc, &ids.toast, config.toast_duration_ms);
    if let Err(e) = &toast {
        wasm_log!("toast unavailable: {}", e);
    }
    report.record("clipboard", clipboard::bind(doc, toast.ok()));
    report.record(
        "counters",
        counters::bind(doc, config.reveal_threshold, config.counter_duration_ms),
    );
    report.record("modal", modal::bind(doc, &ids.modal));
    report.record(
        "contact",
        contact::bind(doc, &ids.contact_form, &ids.contact_status),
    );

    report
}

/// Fail with `MissingElement` when a selector matches nothing
fn require_any<T>(items: Vec<T>, selector: &str) -> SiteResult<Vec<T>> {
    if items.is_empty() {
        return Err(SiteError::MissingElement(selector.to_string()));
    }
    Ok(items)
}

/// Call `handler` with the scroll position at most once per animation frame.
///
/// The handler also runs once immediately so the initial state matches the
/// current scroll position (e.g. after a reload mid-page).
fn on_scroll<F>(handler: F) -> SiteResult<()>
where
    F: FnMut(f64) + 'static,
{
    let window = dom::window()?;
    let handler = Rc::new(RefCell::new(handler));
    let pending = Rc::new(Cell::new(false));

    {
        let mut run = handler.borrow_mut();
        (*run)(dom::scroll_y());
    }

    dom::listen(&window, "scroll", move |_| {
        if pending.replace(true) {
            return;
        }
        let handler = Rc::clone(&handler);
        let frame_pending = Rc::clone(&pending);
        let scheduled = dom::request_animation_frame(move |_| {
            frame_pending.set(false);
            let mut run = handler.borrow_mut();
            (*run)(dom::scroll_y());
        });
        if scheduled.is_err() {
            pending.set(false);
        }
    })
}
