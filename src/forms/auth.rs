//! Login and signup forms

use serde::Deserialize;

use super::{is_valid_email, FormErrors};
use crate::api::dto::{LoginRequest, SignupRequest};

/// Minimum signup password length
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let email = self.email.trim();

        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Enter a valid email address");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }

        errors.into_result(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Enter a valid email address");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Passwords do not match");
        }

        errors.into_result(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_valid() {
        let form = LoginForm {
            email: " kim@example.com ".into(),
            password: "secret".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "kim@example.com");
    }

    #[test]
    fn test_login_errors() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_signup_rules() {
        let form = SignupForm {
            name: "Kim".into(),
            email: "kim@example".into(),
            password: "short".into(),
            confirm_password: "shorter".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
        assert!(errors.contains("confirm_password"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_signup_valid() {
        let form = SignupForm {
            name: "Kim Lee".into(),
            email: "kim@example.com".into(),
            password: "longenough".into(),
            confirm_password: "longenough".into(),
        };
        assert_eq!(form.validate().unwrap().name, "Kim Lee");
    }
}
