//! Light/dark theme switching
//!
//! The resolved theme is applied as `data-theme` on `<html>` and kept in
//! thread-local state so the JS-facing theme functions can read and change
//! it after `initSite`. The choice is persisted to localStorage; storage
//! failures (private mode, disabled storage) are ignored.

use std::cell::{Cell, RefCell};

use web_sys::{Document, Storage};

use crate::dom;
use crate::errors::SiteResult;
use crate::models::Theme;

thread_local! {
    static CURRENT: Cell<Theme> = const { Cell::new(Theme::Light) };
    static STORAGE_KEY: RefCell<String> = RefCell::new("theme".to_string());
    static TOGGLE_ID: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Resolve and apply the starting theme, then wire the toggle button.
///
/// The theme is applied even when the button is missing; only the button
/// binding reports `MissingElement`.
pub fn init(doc: &Document, toggle_id: &str, storage_key: &str) -> SiteResult<Theme> {
    STORAGE_KEY.with(|k| *k.borrow_mut() = storage_key.to_string());
    TOGGLE_ID.with(|t| *t.borrow_mut() = Some(toggle_id.to_string()));

    let stored = local_storage().and_then(|s| s.get_item(storage_key).ok().flatten());
    let theme = Theme::resolve(stored.as_deref(), dom::media_matches("(prefers-color-scheme: dark)"));
    apply(doc, theme);

    let button = dom::by_id(doc, toggle_id)?;
    dom::listen(&button, "click", move |_| {
        toggle();
    })?;
    Ok(theme)
}

pub fn current() -> Theme {
    CURRENT.with(|c| c.get())
}

/// Apply and persist `theme`
pub fn set(theme: Theme) {
    if let Ok(doc) = dom::document() {
        apply(&doc, theme);
    }
    persist(theme);
}

/// Flip the theme; returns the new one
pub fn toggle() -> Theme {
    let next = current().toggled();
    set(next);
    next
}

fn apply(doc: &Document, theme: Theme) {
    CURRENT.with(|c| c.set(theme));

    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    let toggle_id = TOGGLE_ID.with(|t| t.borrow().clone());
    if let Some(button) = toggle_id.and_then(|id| doc.get_element_by_id(&id)) {
        let _ = button.set_attribute("aria-label", theme.toggle_label());
        let _ = button.set_attribute("aria-pressed", if theme == Theme::Dark { "true" } else { "false" });
    }
}

fn persist(theme: Theme) {
    let key = STORAGE_KEY.with(|k| k.borrow().clone());
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(&key, theme.as_str());
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
