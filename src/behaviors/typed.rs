//! Typed hero text
//!
//! Looks up the target element once. If it is missing, or no phrase is
//! configured, the effect never starts: nothing is scheduled and the
//! reason only shows up in the mount report.

use web_sys::Document;

use crate::dom::{self, ElementSurface, TimeoutScheduler};
use crate::errors::SiteResult;
use crate::models::TypingConfig;
use crate::typing;
use crate::wasm_info;

pub fn bind(doc: &Document, target_id: &str, config: &TypingConfig) -> SiteResult<()> {
    let target = dom::by_id(doc, target_id)?;
    typing::launch(
        config.phrases.iter().cloned(),
        config.timing,
        ElementSurface::new(target),
        TimeoutScheduler,
    )?;

    wasm_info!("typing effect started on #{}", target_id);
    Ok(())
}
