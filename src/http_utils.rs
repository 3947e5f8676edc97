//! Shared HTTP helpers for the `reqwest`-backed gateways.

use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use crate::error::RepoKeeperError;

/// User agent sent with every request; GitHub rejects requests without one.
pub(crate) const USER_AGENT: &str = concat!("repokeeper/", env!("CARGO_PKG_VERSION"));

/// Builds an HTTP client, optionally bounded by a whole-request timeout.
pub(crate) fn build_client(timeout: Option<Duration>) -> Result<Client, RepoKeeperError> {
    let builder = Client::builder().user_agent(USER_AGENT);
    let configured = match timeout {
        Some(limit) => builder.timeout(limit),
        None => builder,
    };

    configured
        .build()
        .map_err(|error| RepoKeeperError::Configuration {
            message: format!("failed to configure HTTP client: {error}"),
        })
}

/// Parses a configured endpoint URL.
pub(crate) fn parse_endpoint(raw: &str, setting: &str) -> Result<Url, RepoKeeperError> {
    Url::parse(raw).map_err(|error| RepoKeeperError::Configuration {
        message: format!("{setting} is not a valid URL ({raw}): {error}"),
    })
}

/// Maps a transport failure, distinguishing deadline expiry from other
/// network errors.
pub(crate) fn map_transport_error(operation: &str, error: &reqwest::Error) -> RepoKeeperError {
    if error.is_timeout() {
        RepoKeeperError::Timeout {
            operation: operation.to_owned(),
        }
    } else {
        RepoKeeperError::Network {
            message: format!("{operation} failed: {error}"),
        }
    }
}

/// Reads the response body verbatim, substituting a marker when the body
/// cannot be read.
pub(crate) async fn read_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|error| format!("(failed to read response body: {error})"))
}
