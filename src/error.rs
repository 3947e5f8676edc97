//! Error types shared by the review export and label synchronization
//! pipelines.

use thiserror::Error;

/// Errors surfaced while loading configuration, validating credentials, or
/// talking to the review and label services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepoKeeperError {
    /// No source provided the named credential.
    #[error("{name} is required")]
    MissingCredential {
        /// Human-readable credential name (e.g. `GitHub token`).
        name: String,
    },

    /// The credential was present but failed the structural check.
    #[error("{name} has an invalid format")]
    InvalidCredentialFormat {
        /// Human-readable credential name.
        name: String,
    },

    /// The repository identifier is not of the form `owner/repo`.
    #[error("repository must match owner/repo: {0}")]
    InvalidRepository(String),

    /// An unsupported CLI argument or option value was supplied.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The flag or value that the CLI does not accept.
        argument: String,
    },

    /// Transport-level failure (connection refused, reset, TLS).
    #[error("network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The remote service answered with an unexpected status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The remote service refused the request (403): rate limit or
    /// permission denial.
    #[error("rate limit exceeded or forbidden: {body}")]
    RateLimited {
        /// Raw response body.
        body: String,
    },

    /// No response arrived before the request deadline.
    #[error("{operation} timed out")]
    Timeout {
        /// The operation that was aborted.
        operation: String,
    },

    /// A response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// One or more label creation attempts did not succeed.
    #[error("{failed} label(s) could not be synchronized")]
    LabelSyncIncomplete {
        /// Number of failed or skipped descriptors.
        failed: usize,
    },
}

/// Converts an I/O error to a [`RepoKeeperError::Io`] with context.
pub(crate) fn io_error(context: &str, error: &std::io::Error) -> RepoKeeperError {
    RepoKeeperError::Io {
        message: format!("{context}: {error}"),
    }
}
