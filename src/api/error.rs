//! API Error Types
//!
//! Errors a call against the agency backend can end in. The taxonomy is
//! shared by the native client and the web front-end, so transport errors
//! are carried as strings rather than as a particular HTTP stack's type.

use thiserror::Error;

/// Errors returned by agency API calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401: the session cookie is missing or expired
    #[error("Not signed in")]
    Unauthorized,

    /// 403: signed in, but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response
    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out
    #[error("Request timeout")]
    Timeout,

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx status and its body to an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Http { status, message },
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Timeout | ApiError::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Short message suitable for an inline form error
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Please sign in to continue.".to_string(),
            ApiError::Forbidden(_) => "You do not have access to this page.".to_string(),
            ApiError::NotFound(_) => "We could not find what you were looking for.".to_string(),
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Http { .. } | ApiError::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            ApiError::Network(_) | ApiError::Timeout => {
                "Unable to reach the server. Check your connection.".to_string()
            }
        }
    }
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Pull a human message out of a raw response body
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string())
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
