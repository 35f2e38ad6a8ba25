//! Error types for yammer-matches
//!
//! This module provides the error taxonomy for the library:
//! - Validation failures raised before any request is issued
//! - Remote failures while paginating members or posting announcements
//! - HTTP status code mapping for hosts that expose the handlers over HTTP

use thiserror::Error;

/// Result type alias for yammer-matches operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for yammer-matches
///
/// Every failure is surfaced to the caller as one of these variants. Nothing is
/// retried and nothing is logged-and-continued.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input detected before any I/O (zero group id, empty token, missing matches)
    ///
    /// The message is user-facing and is displayed verbatim.
    #[error("{0}")]
    Validation(String),

    /// A page of the member listing could not be fetched or decoded
    #[error("failed to fetch page {page} of group {group_id}: {reason}")]
    RemoteFetch {
        /// The group being listed
        group_id: i64,
        /// The 1-based page number that failed
        page: u32,
        /// Transport, status or decoding failure description
        reason: String,
    },

    /// The configured page ceiling was reached while the platform still reported more pages
    #[error("group {group_id} still reports more members after {limit} pages")]
    PageLimitExceeded {
        /// The group being listed
        group_id: i64,
        /// The configured `max_pages` value
        limit: u32,
    },

    /// The platform rejected a post
    ///
    /// Displays the response body exactly as the platform returned it.
    #[error("{body}")]
    RemotePost {
        /// HTTP status returned by the platform
        status: u16,
        /// 1-based index of the block that failed
        block: usize,
        /// Response body, verbatim
        body: String,
    },

    /// The operation was cancelled through its cancellation token
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Network error outside the pagination loop (client construction, transport)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Whether this error was raised before any request was issued
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Convert errors to HTTP status codes for hosts that expose handlers over HTTP
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - always user-correctable input
            Error::Validation(_) => 400,

            // 502 Bad Gateway - the platform failed us
            Error::RemoteFetch { .. } => 502,
            Error::PageLimitExceeded { .. } => 502,
            Error::RemotePost { .. } => 502,
            Error::Network(_) => 502,

            // 499 Client Closed Request
            Error::Cancelled => 499,

            // 500 Internal Server Error - our own setup is wrong
            Error::Config { .. } => 500,
            Error::Url(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Validation(_) => "validation_error",
            Error::RemoteFetch { .. } => "remote_fetch_failed",
            Error::PageLimitExceeded { .. } => "page_limit_exceeded",
            Error::RemotePost { .. } => "remote_post_failed",
            Error::Network(_) => "network_error",
            Error::Cancelled => "cancelled",
            Error::Config { .. } => "config_error",
            Error::Url(_) => "invalid_url",
        }
    }
}
