//! Mobile navigation toggle

use web_sys::Document;

use crate::dom;
use crate::errors::SiteResult;
use crate::models::ElementIds;

pub fn bind(doc: &Document, ids: &ElementIds) -> SiteResult<()> {
    let toggle = dom::by_id(doc, &ids.nav_toggle)?;
    let nav = dom::by_id(doc, &ids.nav)?;
    let _ = toggle.set_attribute("aria-expanded", "false");

    {
        let nav = nav.clone();
        let button = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let open = dom::toggle_class(&nav, "open");
            dom::set_class(&button, "active", open);
            let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
        })?;
    }

    // Picking a link closes the menu (mobile)
    for link in dom::query_all_in(&nav, "a") {
        let nav = nav.clone();
        let button = toggle.clone();
        dom::listen(&link, "click", move |_| {
            dom::remove_class(&nav, "open");
            dom::remove_class(&button, "active");
            let _ = button.set_attribute("aria-expanded", "false");
        })?;
    }

    Ok(())
}
