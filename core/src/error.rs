//! Error types for the miningcore API client.
//!
//! # Design
//! The server reports failures as an HTTP status plus a plain-text body, so
//! `Api` carries both verbatim and callers branch on the code (403 vs 404 vs
//! 500) instead of parsing messages. Transport failures happen before any
//! status line exists; [`Error::status`] reports those as 0 so branching
//! stays uniform. Nothing is retried or logged here; every failure
//! propagates with enough context for the caller to decide on retry policy.

use thiserror::Error as ThisError;

/// Errors returned by [`Client`](crate::Client) methods.
#[derive(Debug, ThisError)]
pub enum Error {
    /// DNS, connect, TLS, timeout, or read failure before a complete
    /// response arrived. No HTTP status is available.
    #[error("transport error: {0}")]
    Transport(String),

    /// The base address or a derived request URL failed to parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered 200 but the body did not match the expected
    /// JSON shape. Fatal for the call; the response is malformed.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered with a non-200 status. The body text is
    /// surfaced verbatim as the message.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The endpoint exists in the remote API but is not wired up in this
    /// client. Returned before any network I/O happens.
    #[error("not implemented")]
    NotImplemented,
}

impl Error {
    /// HTTP status code associated with this error.
    ///
    /// Returns the real code for [`Error::Api`] and 0 for everything else,
    /// matching how status-less failures are reported by the API contract.
    pub fn status(&self) -> u16 {
        match self {
            Error::Api { status, .. } => *status,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = Error::Api {
            status: 403,
            message: "access denied".to_string(),
        };
        assert_eq!(err.status(), 403);
        assert_eq!(err.to_string(), "HTTP 403: access denied");
    }

    #[test]
    fn transport_error_reports_status_zero() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(err.status(), 0);
    }

    #[test]
    fn not_implemented_reports_status_zero() {
        assert_eq!(Error::NotImplemented.status(), 0);
    }
}
