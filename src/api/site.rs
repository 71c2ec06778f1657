//! JS-facing entry points
//!
//! The page calls `initSite()` once after the module has loaded, optionally
//! passing a partial configuration object. The theme functions can be used
//! afterwards (e.g. from a keyboard shortcut).

use std::cell::Cell;

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, is_absent, serialize};
use crate::behaviors::{self, theme};
use crate::dom;
use crate::errors::SiteError;
use crate::models::{SiteConfig, Theme};
use crate::{wasm_error, wasm_info, wasm_warn};

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Bind all site behaviors.
///
/// # Parameters
/// - `config`: optional object overriding fields of the built-in config
///
/// # Returns
/// The mount report (`{ bound: [...], skipped: [{ name, reason }] }`)
#[wasm_bindgen(js_name = initSite)]
pub fn init_site(config: JsValue) -> Result<JsValue, JsValue> {
    let config = resolve_config(config)?;

    if MOUNTED.with(|m| m.get()) {
        wasm_warn!("initSite called twice; behaviors are already bound");
        return serialize(&behaviors::MountReport::default(), "Mount report serialization error");
    }

    let doc = dom::document().map_err(|e| {
        wasm_error!("initSite: {}", e);
        e
    })?;
    MOUNTED.with(|m| m.set(true));

    let report = behaviors::mount(&doc, &config);
    wasm_info!(
        "site initialized: {} bound, {} skipped",
        report.bound.len(),
        report.skipped.len()
    );
    serialize(&report, "Mount report serialization error")
}

/// The effective configuration, as JSON-compatible object
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    serialize(&SiteConfig::default(), "Config serialization error")
}

#[wasm_bindgen(js_name = getTheme)]
pub fn get_theme() -> String {
    theme::current().as_str().to_string()
}

/// Set the theme by name (`"light"` or `"dark"`)
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(name: &str) -> Result<(), JsValue> {
    let parsed: Theme = name.parse().map_err(|e: String| SiteError::InvalidConfig(e))?;
    theme::set(parsed);
    Ok(())
}

/// Flip the theme; returns the new theme name
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    theme::toggle().as_str().to_string()
}

fn resolve_config(value: JsValue) -> Result<SiteConfig, SiteError> {
    let defaults = SiteConfig::default();
    if is_absent(&value) {
        return Ok(defaults);
    }
    let overrides: serde_json::Value = deserialize(value, "Config deserialization error")?;
    defaults.with_overrides(overrides)
}
