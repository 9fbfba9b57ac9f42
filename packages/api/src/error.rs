//! # Error taxonomy for backend calls
//!
//! Every endpoint method on [`crate::ApiClient`] returns `Result<_, ApiError>`. The
//! variants follow how the UI reacts to them, not how they were produced:
//!
//! | Variant | Produced by | UI reaction |
//! |---------|-------------|-------------|
//! | [`ApiError::Unauthorized`] | HTTP 401 | clear the token, redirect to `/login`; on the login form, show the backend's reason |
//! | [`ApiError::NotFound`] | HTTP 404 | "endpoint not found" banner |
//! | [`ApiError::Status`] | any other non-2xx | backend's own message, or a generic one |
//! | [`ApiError::Rejected`] | 2xx with `success: false` | backend's message |
//! | [`ApiError::Network`] | request never got a response | "no response from server" |
//! | [`ApiError::Decode`] | body is not the expected JSON | generic failure |
//!
//! [`ApiError::user_message`] is the text shown in inline alert banners; `Display` is
//! the technical form used in logs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("unauthorized (401){}", .0.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Unauthorized(Option<String>),
    #[error("endpoint not found (404)")]
    NotFound,
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the inline alert banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(Some(message)) => message.clone(),
            ApiError::Unauthorized(None) => "Session expired. Please login again.".to_string(),
            ApiError::NotFound => {
                "Endpoint not found. Please check the server configuration.".to_string()
            }
            ApiError::Status { status, .. } if *status >= 500 => {
                "Server error. Please check if the backend is running properly.".to_string()
            }
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { status, .. } => format!("Server error: {status}"),
            ApiError::Rejected(message) => message.clone(),
            ApiError::Network(_) => {
                "No response from server. Please check if the backend is running and accessible."
                    .to_string()
            }
            ApiError::Decode(_) => "Unexpected response from server.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_user_message_for_server_errors_hides_details() {
        let err = ApiError::Status {
            status: 502,
            message: Some("upstream exploded".to_string()),
        };
        assert!(err.user_message().starts_with("Server error."));
    }

    #[test]
    fn test_user_message_without_body() {
        let err = ApiError::Status {
            status: 422,
            message: None,
        };
        assert_eq!(err.user_message(), "Server error: 422");
        assert_eq!(err.to_string(), "HTTP 422");
    }

    #[test]
    fn test_unauthorized_prefers_backend_reason() {
        let err = ApiError::Unauthorized(Some("Invalid email or password".to_string()));
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.to_string(), "unauthorized (401): Invalid email or password");
        assert_eq!(
            ApiError::Unauthorized(None).user_message(),
            "Session expired. Please login again."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized(None).status(), Some(401));
        assert_eq!(ApiError::NotFound.status(), Some(404));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert!(ApiError::Unauthorized(None).is_unauthorized());
    }
}
