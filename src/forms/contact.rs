//! Contact form

use serde::{Deserialize, Serialize};

use super::{is_valid_email, is_valid_phone, FormErrors};

const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

/// Body of `POST contact`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, FormErrors> {
        let mut errors = FormErrors::new();
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.add("name", "Please tell us your name");
        }
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Enter a valid email address");
        }
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.add("phone", "Enter a valid phone number");
        }
        if message.is_empty() {
            errors.add("message", "Please enter a message");
        } else if message.chars().count() > MAX_MESSAGE_LEN {
            errors.add(
                "message",
                format!("Message must be under {} characters", MAX_MESSAGE_LEN),
            );
        }

        errors.into_result(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: message.to_string(),
        })
    }
}
