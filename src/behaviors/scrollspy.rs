//! Scrollspy: highlight the nav link of the section in view

use web_sys::{Document, Element};

use crate::dom;
use crate::errors::SiteResult;
use crate::motion::{active_section, SectionOffset};

/// Pairs each in-page nav link with the section it points to
pub fn bind(doc: &Document, nav_id: &str, offset: f64) -> SiteResult<usize> {
    let nav = dom::by_id(doc, nav_id)?;

    let targets: Vec<(Element, Element, String)> = dom::query_all_in(&nav, "a[href^='#']")
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let id = href.trim_start_matches('#').to_string();
            if id.is_empty() {
                return None;
            }
            let section = doc.get_element_by_id(&id)?;
            Some((link, section, id))
        })
        .collect();
    let targets = super::require_any(targets, "nav a[href^='#']")?;

    let count = targets.len();
    super::on_scroll(move |scroll_y| {
        // Layout can shift (images, fonts), so measure on every frame
        let mut offsets: Vec<SectionOffset> = targets
            .iter()
            .map(|(_, section, id)| SectionOffset {
                id: id.clone(),
                top: dom::document_top(section),
            })
            .collect();
        offsets.sort_by(|a, b| a.top.total_cmp(&b.top));

        let active = active_section(&offsets, scroll_y, offset);
        for (link, _, id) in &targets {
            dom::set_class(link, "active", active == Some(id.as_str()));
        }
    })?;
    Ok(count)
}
