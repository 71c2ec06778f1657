//! Error types for the site behavior layer
//!
//! Most failures here are not surfaced at all: a behavior whose element is
//! missing is simply not bound. `SiteError` exists for the few places that
//! report back to the caller (configuration passed to `initSite`) and for
//! logging the reason a behavior was skipped.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    /// A required element id is not present in the page
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// The typing effect was configured without any non-empty phrase
    #[error("Phrase set is empty")]
    EmptyPhraseSet,

    /// An element exists but is not the kind the behavior needs
    #[error("Element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },

    /// Site configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A project card carries a malformed `data-project` payload
    #[error("Invalid project data: {0}")]
    InvalidProject(String),

    /// A browser API call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl SiteError {
    /// Wrap a thrown JS value, keeping its string form when it has one
    pub fn from_js(context: &str, value: &JsValue) -> Self {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(format!("{}: {}", context, detail))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SiteError::MissingElement("typed".to_string()).to_string(),
            "Missing element: #typed"
        );
        assert_eq!(SiteError::EmptyPhraseSet.to_string(), "Phrase set is empty");
        assert_eq!(
            SiteError::WrongElementKind {
                id: "contactForm".to_string(),
                expected: "form",
            }
            .to_string(),
            "Element #contactForm is not a form"
        );
    }
}
