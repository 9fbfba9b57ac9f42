//! The `{ success, data, message }` envelope every backend endpoint answers with.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Response envelope. `data` is absent on message-only responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Best human-readable explanation the backend gave, if any.
    pub fn failure_message(&self) -> Option<String> {
        failure_message(
            self.message.as_deref(),
            self.errors.as_deref(),
            self.error.as_deref(),
        )
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }
}

/// Loosely typed error body used for non-2xx responses, which may not be envelopes.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Vec<String>>,
    error: Option<String>,
}

fn failure_message(
    message: Option<&str>,
    errors: Option<&[String]>,
    error: Option<&str>,
) -> Option<String> {
    let non_blank = |s: &&str| !s.trim().is_empty();
    message
        .filter(non_blank)
        .map(str::to_string)
        .or_else(|| {
            errors
                .filter(|errs| !errs.is_empty())
                .map(|errs| errs.join(", "))
        })
        .or_else(|| error.filter(non_blank).map(str::to_string))
}

/// Map an HTTP status and raw body to an envelope or an [`ApiError`].
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    let reason = || {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        failure_message(
            parsed.message.as_deref(),
            parsed.errors.as_deref(),
            parsed.error.as_deref(),
        )
    };
    match status {
        200..=299 => {}
        401 => return Err(ApiError::Unauthorized(reason())),
        404 => return Err(ApiError::NotFound),
        _ => {
            return Err(ApiError::Status {
                status,
                message: reason(),
            })
        }
    }

    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        let message = envelope
            .failure_message()
            .unwrap_or_else(|| "Request failed".to_string());
        return Err(ApiError::Rejected(message));
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_with_data() {
        let env: Envelope<Vec<u32>> =
            decode(200, r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_success_without_data_keeps_message() {
        let env: Envelope<Value> =
            decode(200, r#"{"success": true, "message": "Reset email sent"}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("Reset email sent"));
        assert!(env.into_data().is_err());
    }

    #[test]
    fn test_success_false_is_rejected_even_on_200() {
        let err = decode::<Value>(200, r#"{"success": false, "message": "Invalid credentials"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Invalid credentials".to_string()));
    }

    #[test]
    fn test_401_keeps_backend_reason() {
        let err = decode::<Value>(
            401,
            r#"{"success": false, "message": "Invalid email or password"}"#,
        )
        .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid email or password");

        let err = decode::<Value>(401, "Unauthorized").unwrap_err();
        assert_eq!(err, ApiError::Unauthorized(None));
        assert_eq!(err.user_message(), "Session expired. Please login again.");
    }

    #[test]
    fn test_404_ignores_body() {
        assert_eq!(decode::<Value>(404, "<html>").unwrap_err(), ApiError::NotFound);
    }

    #[test]
    fn test_error_status_joins_validation_errors() {
        let err = decode::<Value>(
            400,
            r#"{"success": false, "errors": ["Name is required", "Password too short"]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Name is required, Password too short".to_string()),
            }
        );
    }

    #[test]
    fn test_error_status_with_non_json_body() {
        let err = decode::<Value>(503, "Service Unavailable").unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 503,
                message: None
            }
        );
    }

    #[test]
    fn test_malformed_success_body() {
        assert!(matches!(
            decode::<Value>(200, "not json").unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_blank_message_falls_through_to_error_field() {
        let err = decode::<Value>(409, r#"{"message": "  ", "error": "Duplicate brand"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "Duplicate brand");
    }
}
