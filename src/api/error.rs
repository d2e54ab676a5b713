// src/api/error.rs
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the remote API client.
///
/// Variants carry plain strings so results can travel inside cloned events
/// back to the main thread.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, TLS failure).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status. `message` is the first
    /// entry of the backend's `errors` array when one was decodable.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Error body the backend sends on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Builds a `Status` error from a non-success response body, preferring the
/// backend's own message when present.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.errors.into_iter().next())
        .unwrap_or_else(|| format!("request rejected with HTTP {status}"));
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_backend_message() {
        let err = status_error(400, r#"{"errors":["Name is required","other"]}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Name is required".to_string()
            }
        );
    }

    #[test]
    fn test_status_error_falls_back_on_opaque_body() {
        let err = status_error(502, "<html>Bad Gateway</html>");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_empty_errors_array() {
        let err = status_error(401, r#"{"errors":[]}"#);
        match err {
            ApiError::Status { message, .. } => assert!(message.contains("401")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
