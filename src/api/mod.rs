//! Portfolio site WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serde helpers for JS values
//! - `site`: `initSite` and the theme functions exported to JavaScript

pub mod helpers;
pub mod site;

pub use site::{default_config, get_theme, init_site, set_theme, toggle_theme};
