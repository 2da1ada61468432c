//! Form models and validation
//!
//! Forms hold raw text as typed by the user. `validate` turns them into the
//! request body for the backend or a set of per-field messages for inline
//! display.

pub mod admin;
pub mod auth;
pub mod contact;

pub use admin::{HistoryDraft, ProfileDraft, ProfilePayload};
pub use auth::{LoginForm, SignupForm};
pub use contact::{ContactForm, ContactMessage};

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .0.len())]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message for a field wins
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no messages were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Loose syntactic email check
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email.trim())
}

/// Digits with an optional leading `+`, spaces and dashes allowed
pub fn is_valid_phone(phone: &str) -> bool {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE
        .get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,19}$").expect("valid phone regex"))
        .is_match(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FormErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Email is invalid");

        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "1 field(s) need attention");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FormErrors::new().into_result(5), Ok(5));

        let mut errors = FormErrors::new();
        errors.add("name", "required");
        assert!(errors.into_result(5).is_err());
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("  ana.cruz+jobs@mail.example.ph "));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_check() {
        assert!(is_valid_phone("+65 9123 4567"));
        assert!(is_valid_phone("852-1234-5678"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("123"));
    }
}
