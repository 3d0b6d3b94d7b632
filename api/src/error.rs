//! Error types for the remote API client.

use crate::session::SessionError;
use thiserror::Error;

/// Errors that can occur when talking to the document backend.
///
/// Failures are distinct and surfaced to the caller as-is; the client never
/// retries internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend rejected the request with HTTP 401.
    ///
    /// The persisted session token has already been cleared by the time
    /// this error is returned.
    #[error("unauthorized: {}", message.as_deref().unwrap_or("session rejected"))]
    Unauthorized {
        /// Error text from the response body, when one was present.
        message: Option<String>,
    },

    /// The backend reported an invalid or expired session at the
    /// application level.
    ///
    /// The persisted session token has already been cleared by the time
    /// this error is returned.
    #[error("session invalid: {}", message.as_deref().unwrap_or("session expired"))]
    SessionInvalid {
        /// Error text from the response envelope, when one was present.
        message: Option<String>,
    },

    /// The backend reported an application-level error.
    #[error("backend error (code {code}): {message}")]
    Api {
        /// Non-zero envelope error code.
        code: i64,
        /// Error text from the envelope.
        message: String,
    },

    /// Non-2xx status without a decodable error envelope.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response decoded but the required payload was absent.
    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),

    /// The response body could not be decoded.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The persisted session token could not be read.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// The human-readable message carried by the error payload, if any.
    ///
    /// Slices use this to surface the backend's `error_text` and fall back
    /// to a generic per-operation message when the failure carries none
    /// (network failures, decode failures, bare statuses).
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            Self::Unauthorized { message } | Self::SessionInvalid { message } => {
                message.as_deref()
            },
            _ => None,
        }
    }

    /// Whether this failure invalidated the session.
    #[must_use]
    pub const fn is_session_invalid(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::SessionInvalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text() {
        let error = ApiError::Api {
            code: 5,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(error.user_message(), Some("Invalid credentials"));
    }

    #[test]
    fn user_message_absent_for_transport_failures() {
        assert_eq!(ApiError::Network("boom".to_string()).user_message(), None);
        assert_eq!(
            ApiError::Decode("bad json".to_string()).user_message(),
            None
        );
        assert_eq!(
            ApiError::Status {
                status: 500,
                body: String::new(),
            }
            .user_message(),
            None
        );
    }

    #[test]
    fn user_message_empty_api_text_falls_through() {
        let error = ApiError::Api {
            code: 7,
            message: String::new(),
        };
        assert_eq!(error.user_message(), None);
    }

    #[test]
    fn session_invalidation_classification() {
        assert!(ApiError::Unauthorized { message: None }.is_session_invalid());
        assert!(ApiError::SessionInvalid { message: None }.is_session_invalid());
        assert!(!ApiError::Network("x".to_string()).is_session_invalid());
    }
}
