//! Error types for the vturl library.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.

use thiserror::Error;

/// The main error type for VirusTotal client operations.
///
/// All error variants include context about what failed and why,
/// enabling proper error handling and debugging.
#[derive(Debug, Error)]
pub enum VtError {
    /// The client configuration is invalid (for example, an empty API key).
    #[error("configuration error: {message}")]
    InvalidConfiguration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The API responded with a non-success HTTP status.
    ///
    /// The body of a non-2xx response is never interpreted as a success
    /// payload; only the status line is surfaced.
    #[error("VirusTotal API error: {status} {reason}")]
    RemoteApi {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase accompanying the status, if known.
        reason: String,
    },

    /// The wait loop used all allotted poll attempts without the analysis
    /// reaching the `completed` status.
    #[error("analysis not completed after {attempts} poll attempts")]
    PollingExhausted {
        /// Number of poll attempts that were performed.
        attempts: u32,
    },

    /// A transport-level failure (connection refused, DNS, request timeout).
    ///
    /// These propagate opaquely from the underlying HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be deserialized into the
    /// documented shape.
    #[error("invalid response body: {details}")]
    InvalidResponse {
        /// Details about what failed to parse.
        details: String,
    },
}

impl VtError {
    /// Returns `true` if the operation that produced this error may succeed
    /// when attempted again later.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::PollingExhausted { .. } => true,
            // 429 and 5xx are transient; other 4xx are not.
            Self::RemoteApi { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidConfiguration { .. } | Self::InvalidResponse { .. } => false,
        }
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates a `RemoteApi` error.
    pub fn remote_api(status: u16, reason: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidResponse` error.
    pub fn invalid_response(details: impl Into<String>) -> Self {
        Self::InvalidResponse {
            details: details.into(),
        }
    }
}

/// A specialized `Result` type for VirusTotal client operations.
pub type VtResult<T> = Result<T, VtError>;
