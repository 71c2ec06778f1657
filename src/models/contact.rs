//! Contact form stub
//!
//! The form is not wired to any backend. Submissions are validated and
//! acknowledged locally, then discarded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email address",
            ContactField::Message => "message",
        }
    }
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Returns the invalid fields, in form order
    pub fn validate(&self) -> Result<(), Vec<ContactField>> {
        let mut invalid = Vec::new();

        if self.name.is_empty() {
            invalid.push(ContactField::Name);
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            invalid.push(ContactField::Email);
        }
        if self.message.is_empty() {
            invalid.push(ContactField::Message);
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    /// Status line shown after a submit attempt
    pub fn status_message(result: &Result<(), Vec<ContactField>>, name: &str) -> String {
        match result {
            Ok(()) => format!(
                "Thanks, {}! This form isn't connected yet, so please reach out by email instead.",
                name
            ),
            Err(fields) => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                format!("Please check your {}.", labels.join(", "))
            }
        }
    }
}
