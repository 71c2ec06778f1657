//! Portfolio Site WASM Module
//!
//! Client-side behaviors for a static portfolio page: the typed hero text,
//! theme switching, navigation toggle, scroll effects (reveal, parallax,
//! scrollspy, back to top), copy buttons with toast feedback, animated
//! counters, the project modal and the contact form stub.

pub mod api;
pub mod behaviors;
pub mod dom;
pub mod errors;
pub mod models;
pub mod motion;
pub mod typing;

// Re-export commonly used types
pub use errors::{SiteError, SiteResult};
pub use models::{SiteConfig, Theme};
pub use typing::{PhraseSet, Step, Typewriter, TypingCursor, TypingTiming};

use wasm_bindgen::prelude::*;

// Runs when the module is instantiated; behaviors wait for `initSite`.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"[WASM] logger already initialized".into());
        }
    }

    log::info!("Portfolio WASM module initialized");
}
