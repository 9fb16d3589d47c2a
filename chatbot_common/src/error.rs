//! Error types shared by the chat session and its adapters.
//!
//! Faults are grouped by the collaborator that raised them:
//! - `FetchError` — failures of the exchange-rate provider.
//! - `BackendError` — failures of the conversational-model backend.
//! - `ChatError` — the umbrella type the session loop recovers from, which also
//!   carries local I/O, JSON and persistence failures. Provider failures never
//!   reach it: a failed fetch becomes a fixed reply in the dialogue.
use std::io;

use thiserror::Error;

/// Failure while fetching a quote from the exchange-rate provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Provider unreachable, timed out, or answered with a non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered 2xx but the body was not the expected JSON shape.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Anything the two cases above do not cover.
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Failure while invoking the conversational-model backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Backend unreachable or the connection dropped mid-request.
    #[error("Backend network error: {0}")]
    Network(String),

    /// Backend answered but the reply could not be understood.
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    /// Backend answered with a non-success status (unknown model, overload, ...).
    #[error("Backend rejected the request ({status}): {detail}")]
    Rejected {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error body or reason phrase returned with the status.
        detail: String,
    },
}

/// Unified error type for the chat session.
#[derive(Error, Debug)]
pub enum ChatError {
    /// I/O error on the terminal streams or local files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model backend failure.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Transcript could not be written; contains the target path and cause.
    #[error("Failed to save transcript: {0}")]
    Persistence(String),

    /// The HTTP client itself could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_status() || err.is_body() {
            FetchError::Network(err.to_string())
        } else if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::Unknown(err.to_string())
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::MalformedResponse(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_converts_into_chat_error() {
        let err: ChatError = BackendError::Network("connection refused".into()).into();
        assert!(matches!(err, ChatError::Backend(BackendError::Network(_))));
        assert_eq!(err.to_string(), "Backend network error: connection refused");
    }

    #[test]
    fn rejected_backend_error_mentions_status() {
        let err = BackendError::Rejected {
            status: 404,
            detail: "model 'llama3.2' not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected the request (404): model 'llama3.2' not found"
        );
    }
}
