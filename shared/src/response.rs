//! API response envelope
//!
//! Every admin API endpoint wraps its payload in `{success, data, message}`.
//! The envelope is consumed, never produced, by this core; the backend owns
//! the wire format.

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// JSON envelope returned by every admin API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message (usually present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the payload, mapping API-level failure to
    /// an [`AppError`] carrying the server's message.
    pub fn into_result(self) -> AppResult<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| ErrorCode::Unknown.message().to_string());
            return Err(AppError::with_message(ErrorCode::Unknown, message));
        }
        self.data
            .ok_or_else(|| AppError::internal("response envelope is missing data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{"success":true,"data":42}"#;
        let envelope: ApiEnvelope<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result().unwrap(), 42);
    }

    #[test]
    fn test_failure_envelope_carries_message() {
        let json = r#"{"success":false,"message":"manufacturer is disabled"}"#;
        let envelope: ApiEnvelope<i32> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message, "manufacturer is disabled");
    }

    #[test]
    fn test_failure_envelope_without_message() {
        let json = r#"{"success":false}"#;
        let envelope: ApiEnvelope<i32> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::Unknown);
    }

    #[test]
    fn test_success_envelope_missing_data() {
        let json = r#"{"success":true}"#;
        let envelope: ApiEnvelope<i32> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
