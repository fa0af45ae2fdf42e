//! Error types for device operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. Nothing in this
/// crate retries on these errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, refused connections and
    /// TLS handshake errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for device handler operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The management base URL cannot carry API paths.
    #[error("Base URL '{0}' cannot be used as an API root")]
    InvalidBaseUrl(String),

    /// The access token cannot be carried in an HTTP header.
    #[error("Access token contains characters not allowed in an HTTP header")]
    InvalidAccessToken,

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The system status endpoint did not report a firmware version.
    #[error("System status response (HTTP {status}) carries no firmware version")]
    MissingVersion {
        /// HTTP status of the status request
        status: http::StatusCode,
    },

    /// The member path does not name an attribute that can be edited alone.
    #[error("Invalid member path '{path}': {reason}")]
    InvalidMemberPath {
        /// The member path as given
        path: String,
        /// Reason for invalidity
        reason: String,
    },

    /// `member_state = present` needs a value for the addressed attribute.
    #[error("No value for member '{attribute}' in the task body")]
    MissingMemberValue {
        /// Attribute addressed by the member path
        attribute: String,
    },
}
