//! Core error types for the PostureKit data layer.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest) are converted to these types at the client edge, carrying
//! only the classification the resource layer needs: did the backend answer
//! at all, and if so, with what status.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the data-fetching layer.
///
/// Every failure a resource can observe is one of these variants. The
/// variants are `String`-backed so the type stays transport-agnostic and
/// cheaply cloneable into resource state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The backend could not be reached at all: connection refused, DNS
    /// failure, or request timeout. No HTTP response exists for this call.
    #[error("Backend unreachable: {0}")]
    Offline(String),

    /// The backend answered with a non-success status. The message is taken
    /// from the response error body when one was present.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A response arrived but its body could not be decoded into the
    /// expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Input validation failed before any network call was made.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The credential store could not be read or written.
    #[error("Credential store error: {0}")]
    Store(String),

    /// Anything that does not fit the categories above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns true iff this failure means the backend is unreachable.
    ///
    /// This is the resilience decision the resource layer branches on: an
    /// offline failure degrades to fixture data, while anything that
    /// carries an HTTP response (including 4xx/5xx) is surfaced to the
    /// caller and must never trigger fixture substitution.
    pub fn is_offline(&self) -> bool {
        matches!(self, Error::Offline(_))
    }

    /// Returns true iff this is an HTTP 401 from the backend.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// The HTTP status carried by this error, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Validation errors for user input, raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl From<reqwest::Error> for Error {
    /// Classify a reqwest error once, at the edge.
    ///
    /// Timeouts and connection failures never saw a response, so they are
    /// `Offline`. Errors that carry a status (from `error_for_status`) keep
    /// it. Body-decode failures happened after a response arrived and are
    /// therefore real errors, not connectivity ones. Everything else that
    /// reaches us without a response is treated as the backend being away.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return Error::Offline(err.to_string());
        }
        if let Some(status) = err.status() {
            return Error::Api {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        Error::Offline(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_is_offline() {
        let error = Error::Offline("connection refused".to_string());
        assert!(error.is_offline());
    }

    #[test]
    fn test_client_error_is_not_offline() {
        let error = Error::Api {
            status: 404,
            message: "Patient not found".to_string(),
        };
        assert!(!error.is_offline());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_server_error_is_not_offline() {
        let error = Error::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert!(!error.is_offline());
    }

    #[test]
    fn test_decode_error_is_not_offline() {
        let error = Error::Decode("expected value at line 1".to_string());
        assert!(!error.is_offline());
    }

    #[test]
    fn test_validation_error_is_not_offline() {
        let error = Error::Validation(ValidationError::MissingField("name".to_string()));
        assert!(!error.is_offline());
    }

    #[test]
    fn test_unauthorized_detection() {
        let unauthorized = Error::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let forbidden = Error::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(Error::Offline("timeout".to_string()).status(), None);
        assert_eq!(Error::Decode("bad json".to_string()).status(), None);
    }

    #[test]
    fn test_error_display() {
        let error = Error::Api {
            status: 422,
            message: "email already registered".to_string(),
        };
        assert_eq!(format!("{}", error), "API error 422: email already registered");

        let error = Error::Validation(ValidationError::PasswordMismatch);
        assert_eq!(format!("{}", error), "Input validation failed: Passwords do not match");
    }
}
