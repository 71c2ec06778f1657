//! Current year in the footer

use web_sys::Document;

use crate::dom;
use crate::errors::SiteResult;

pub fn bind(doc: &Document, year_id: &str) -> SiteResult<u32> {
    let span = dom::by_id(doc, year_id)?;
    let year = js_sys::Date::new_0().get_full_year();
    span.set_text_content(Some(&year.to_string()));
    Ok(year)
}
