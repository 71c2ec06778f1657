//! "Back to top" button

use web_sys::{Document, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::errors::SiteResult;
use crate::motion::back_to_top_visible;

pub fn bind(doc: &Document, button_id: &str, threshold: f64) -> SiteResult<()> {
    let button = dom::by_id(doc, button_id)?;

    {
        let button = button.clone();
        super::on_scroll(move |scroll_y| {
            dom::set_class(&button, "visible", back_to_top_visible(scroll_y, threshold));
        })?;
    }

    dom::listen(&button, "click", |event| {
        event.prevent_default();
        scroll_to_top();
    })
}

pub fn scroll_to_top() {
    let Ok(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if dom::prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}
