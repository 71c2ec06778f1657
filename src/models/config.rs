//! Site configuration
//!
//! Defaults ship inside the module (`config/site.yaml`, parsed once with
//! serde_yaml). The page may pass a partial override object to `initSite`;
//! it is deep-merged over those defaults, so anything it leaves out keeps
//! the shipped value.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};
use crate::typing::TypingTiming;

const EMBEDDED_CONFIG: &str = include_str!("../../config/site.yaml");

static DEFAULT_CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_yaml(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        log::warn!("embedded site.yaml rejected ({}), using built-in defaults", e);
        SiteConfig::builtin()
    })
});

/// Typed hero text settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub timing: TypingTiming,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["Software Engineer".to_string()],
            timing: TypingTiming::default(),
        }
    }
}

/// Element ids the behaviors bind to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub typed: String,
    pub nav_toggle: String,
    pub nav: String,
    pub year: String,
    pub theme_toggle: String,
    pub back_to_top: String,
    pub toast: String,
    pub modal: String,
    pub contact_form: String,
    pub contact_status: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            typed: "typed".to_string(),
            nav_toggle: "navToggle".to_string(),
            nav: "nav".to_string(),
            year: "year".to_string(),
            theme_toggle: "themeToggle".to_string(),
            back_to_top: "backToTop".to_string(),
            toast: "toast".to_string(),
            modal: "projectModal".to_string(),
            contact_form: "contactForm".to_string(),
            contact_status: "formStatus".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default = "SiteConfig::builtin")]
pub struct SiteConfig {
    pub typing: TypingConfig,
    pub ids: ElementIds,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Scroll offset (px) past which the back-to-top button shows
    pub back_to_top_threshold: f64,
    /// Distance (px) below the viewport top at which a section counts as current
    pub scrollspy_offset: f64,
    pub counter_duration_ms: f64,
    pub toast_duration_ms: u32,
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl SiteConfig {
    /// Hard-coded fallback used when the embedded YAML cannot be read
    fn builtin() -> Self {
        Self {
            typing: TypingConfig::default(),
            ids: ElementIds::default(),
            reveal_threshold: 0.15,
            back_to_top_threshold: 400.0,
            scrollspy_offset: 120.0,
            counter_duration_ms: 1800.0,
            toast_duration_ms: 2200,
            theme_storage_key: "theme".to_string(),
        }
    }

    /// Parse YAML, filling missing fields from the built-in values
    pub fn from_yaml(source: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_yaml::from_str(source)
            .map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON override object on top of the defaults
    pub fn from_json(source: &str) -> SiteResult<Self> {
        let overrides: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        SiteConfig::default().with_overrides(overrides)
    }

    /// Deep-merge `overrides` into this config. Objects merge key by key,
    /// null entries (JS `undefined`) are skipped and any other value
    /// (arrays included) replaces the current one.
    pub fn with_overrides(&self, overrides: serde_json::Value) -> SiteResult<Self> {
        if overrides.is_null() {
            return Ok(self.clone());
        }
        if !overrides.is_object() {
            return Err(SiteError::InvalidConfig(
                "configuration must be an object".to_string(),
            ));
        }

        let mut base = serde_json::to_value(self)
            .map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        merge_json(&mut base, overrides);

        let config: SiteConfig = serde_json::from_value(base)
            .map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the behaviors cannot work with
    pub fn validate(&self) -> SiteResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "reveal_threshold {} must be between 0 and 1",
                self.reveal_threshold
            )));
        }
        if self.counter_duration_ms <= 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "counter_duration_ms {} must be positive",
                self.counter_duration_ms
            )));
        }
        if self.theme_storage_key.is_empty() {
            return Err(SiteError::InvalidConfig(
                "theme_storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base_map), serde_json::Value::Object(over_map)) => {
            for (key, value) in over_map {
                if value.is_null() {
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_yaml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.typing.phrases.len(), 4);
        assert_eq!(config.ids.typed, "typed");
        assert_eq!(config.typing.timing.pause_ms, 1600);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"typing": {"phrases": ["Hi"]}}"#).unwrap();
        assert_eq!(config.typing.phrases, vec!["Hi"]);
        assert_eq!(config.typing.timing, TypingTiming::default());
        assert_eq!(config.ids.nav, "nav");
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_null_override_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"typing": null, "ids": {"nav": null, "year": "footerYear"}}"#)
                .unwrap();
        assert_eq!(config.typing.phrases.len(), 4);
        assert_eq!(config.ids.nav, "nav");
        assert_eq!(config.ids.year, "footerYear");
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn test_override_replaces_nested_value_only() {
        let config = SiteConfig::from_json(r#"{"typing": {"timing": {"pause_ms": 500}}}"#).unwrap();
        assert_eq!(config.typing.timing.pause_ms, 500);
        assert_eq!(config.typing.timing.type_ms, 90);
        assert_eq!(config.typing.phrases.len(), 4);
    }

    #[test]
    fn test_non_object_override_rejected() {
        assert!(SiteConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(SiteConfig::from_yaml("typing: [unclosed").is_err());
    }
}
