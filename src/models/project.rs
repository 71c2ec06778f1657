//! Project details shown in the modal
//!
//! Each project card carries its details as JSON in a `data-project`
//! attribute, e.g.
//!
//! ```json
//! {"title": "Tiny DB", "description": "...", "tags": ["rust"], "link": "https://..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SiteError, SiteResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProjectDetail {
    /// Parse a card's `data-project` payload
    pub fn from_attribute(raw: &str) -> SiteResult<Self> {
        let detail: ProjectDetail = serde_json::from_str(raw)
            .map_err(|e| SiteError::InvalidProject(e.to_string()))?;

        if detail.title.trim().is_empty() {
            return Err(SiteError::InvalidProject("title is empty".to_string()));
        }
        Ok(detail)
    }

    /// Link to show, if it is an http(s) URL
    pub fn safe_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|l| l.starts_with("https://") || l.starts_with("http://"))
    }
}
