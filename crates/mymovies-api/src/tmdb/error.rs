//! Classified errors for TMDB operations.

use thiserror::Error;

/// Error category without the underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorKind {
    /// Connectivity or timeout problem.
    Transport,
    /// Non-2xx HTTP response.
    HttpStatus,
    /// Payload did not match the expected shape.
    Decode,
    /// Payload decoded but the wanted content is absent.
    MissingData,
}

/// A classified failure of a TMDB operation.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {operation}")]
    Transport {
        /// Path of the failed operation.
        operation: String,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The request URL could not be built from the base URL.
    #[error("invalid request URL: {operation}")]
    InvalidUrl {
        /// Path of the failed operation.
        operation: String,
        /// Underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// The server answered with a non-2xx status.
    #[error("TMDB API error (HTTP {status}) on {operation}: {message}")]
    HttpStatus {
        /// Path of the failed operation.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// `status_message` from the error body, or the raw body.
        message: String,
    },

    /// The payload could not be decoded into the expected entity.
    #[error("failed to decode JSON response")]
    Decode {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The payload decoded fine but lacks the requested content.
    #[error("missing data: {what}")]
    MissingData {
        /// Description of the absent content.
        what: String,
    },
}

impl ApiError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::InvalidUrl { .. } => ErrorKind::Transport,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::MissingData { .. } => ErrorKind::MissingData,
        }
    }

    /// Short heading suitable for an alert title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Transport => "Connection problem",
            ErrorKind::HttpStatus => "Server error",
            ErrorKind::Decode => "Unexpected response",
            ErrorKind::MissingData => "Content unavailable",
        }
    }
}
