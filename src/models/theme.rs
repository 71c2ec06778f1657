//! Color theme preference
//!
//! The theme is the only value the site persists. It is stored as the plain
//! strings `"light"` / `"dark"` and applied as a `data-theme` attribute.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Pick the starting theme: a valid stored value wins, then the
    /// system's dark-mode preference, then light.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        if let Some(theme) = stored.and_then(|s| s.parse().ok()) {
            return theme;
        }
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Label for the toggle button's `aria-label`
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: '{}'", other)),
        }
    }
}
