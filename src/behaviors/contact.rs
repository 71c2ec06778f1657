//! Contact form stub
//!
//! Intercepts submit, validates locally and shows a status line. Nothing is
//! sent anywhere.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::errors::{SiteError, SiteResult};
use crate::models::{ContactField, ContactSubmission};
use crate::wasm_info;

pub fn bind(doc: &Document, form_id: &str, status_id: &str) -> SiteResult<()> {
    let form = dom::by_id(doc, form_id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| SiteError::WrongElementKind {
            id: form_id.to_string(),
            expected: "form",
        })?;
    let status = doc.get_element_by_id(status_id);

    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        let submission = ContactSubmission::new(
            &field_value(&target, "name"),
            &field_value(&target, "email"),
            &field_value(&target, "message"),
        );
        let result = submission.validate();
        mark_invalid(&target, &result);

        if let Some(status) = &status {
            status.set_text_content(Some(&ContactSubmission::status_message(&result, &submission.name)));
            dom::set_class(status, "success", result.is_ok());
            dom::set_class(status, "error", result.is_err());
        }

        if result.is_ok() {
            wasm_info!("contact form accepted locally (not sent)");
            target.reset();
        }
    })
}

fn field(form: &HtmlFormElement, name: &str) -> Option<Element> {
    dom::query_in(form, &format!("[name='{}']", name))
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(el) = field(form, name) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    el.text_content().unwrap_or_default()
}

fn mark_invalid(form: &HtmlFormElement, result: &Result<(), Vec<ContactField>>) {
    let invalid: &[ContactField] = match result {
        Ok(()) => &[],
        Err(fields) => fields,
    };
    for (field_kind, name) in [
        (ContactField::Name, "name"),
        (ContactField::Email, "email"),
        (ContactField::Message, "message"),
    ] {
        if let Some(el) = field(form, name) {
            let value = if invalid.contains(&field_kind) { "true" } else { "false" };
            let _ = el.set_attribute("aria-invalid", value);
        }
    }
}
