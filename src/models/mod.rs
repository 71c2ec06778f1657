//! Data models for the site behaviors
//!
//! Plain serde types with no DOM access, so they can be tested natively.

pub mod config;
pub mod contact;
pub mod project;
pub mod theme;

// Re-export commonly used types
pub use config::{ElementIds, SiteConfig, TypingConfig};
pub use contact::{ContactField, ContactSubmission};
pub use project::ProjectDetail;
pub use theme::Theme;
