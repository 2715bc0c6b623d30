//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! Two layers of errors exist:
//!
//! - [`ApiError`]: everything that can go wrong talking to the backend.
//!   Server rejections keep their HTTP status and the raw response body so
//!   callers can branch on the status code (e.g. 401 vs 500) instead of
//!   string-matching messages.
//! - [`AppError`]: application-wide error type wrapping API failures plus
//!   local concerns (input validation, session storage).
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use client::core::error::AppError;
//!
//! fn validate_reply(reply: &str) -> Result<(), AppError> {
//!     if reply.is_empty() {
//!         return Err(AppError::Validation("Reply must not be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Error from a backend API call.
///
/// Server rejections are ordinary values of this type: a non-2xx response
/// becomes [`ApiError::Status`] carrying the HTTP status code and whatever
/// the server wrote in the body. Transport and decoding failures get their
/// own variants so callers can tell "the server said no" apart from "the
/// server never answered".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    ///
    /// `msg` is the raw response body, which the backend fills with a
    /// human-readable reason ("wrong password", "group is locked", ...).
    #[error("server returned {status}: {msg}")]
    Status { status: u16, msg: String },

    /// The request never completed: connection refused, timeout, DNS failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered 2xx but the body did not parse as the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Application-wide error type covering all error scenarios in the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation error (bad email, wrong emoji count, empty group name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session storage error (unreadable or unwritable token file).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 401,
            msg: "wrong password".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(ApiError::Network("timeout".to_string()).status(), None);
    }

    #[test]
    fn test_display_includes_server_message() {
        let err = ApiError::Status {
            status: 500,
            msg: "database unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 500: database unavailable");

        let app_err = AppError::from(err);
        assert!(app_err.to_string().starts_with("API error:"));
    }
}
