//! Classified result of a single label creation attempt.

use std::fmt;

/// Outcome of one create request; produced once per descriptor and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The label was created (2xx).
    Created,
    /// The label was already present (422). Not an error.
    AlreadyExists,
    /// The request was refused (403): rate limit or permission denial.
    RateLimited {
        /// Raw response body.
        body: String,
    },
    /// Any other status.
    Fatal {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The request never produced a response.
    NetworkError {
        /// Transport error detail.
        message: String,
    },
    /// No response arrived before the request deadline.
    Timeout,
}

impl SyncOutcome {
    /// Returns true for outcomes that leave the label present remotely.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created | Self::AlreadyExists)
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::AlreadyExists => f.write_str("already exists"),
            Self::RateLimited { body } => write!(f, "rate limited or forbidden: {body}"),
            Self::Fatal { status, body } => write!(f, "failed with status {status}: {body}"),
            Self::NetworkError { message } => write!(f, "network error: {message}"),
            Self::Timeout => f.write_str("timed out"),
        }
    }
}
