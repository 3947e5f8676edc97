//! Remote label creation.
//!
//! [`ResourceCreator`] turns one descriptor into one [`SyncOutcome`]; it never
//! returns an error, so the synchronizer can handle every case exhaustively.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::credentials::GitHubToken;
use crate::error::RepoKeeperError;
use crate::http_utils::{build_client, parse_endpoint, read_body};
use crate::repository::RepositorySlug;

use super::catalog::LabelDescriptor;
use super::outcome::SyncOutcome;

/// Default GitHub REST API base.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Deadline for a single label creation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Creates one remote resource per descriptor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceCreator: Send + Sync {
    /// Issue a single create request and classify its result.
    async fn create(&self, label: &LabelDescriptor) -> SyncOutcome;
}

/// Creates labels through the GitHub REST API.
pub struct GitHubLabelCreator {
    client: Client,
    endpoint: Url,
    token: GitHubToken,
}

impl GitHubLabelCreator {
    /// Creates a client with the default 10 second deadline.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when `api_base` is not a
    /// valid URL or the HTTP client cannot be constructed.
    pub fn new(
        api_base: &str,
        repository: &RepositorySlug,
        token: GitHubToken,
    ) -> Result<Self, RepoKeeperError> {
        Self::with_timeout(api_base, repository, token, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request deadline.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn with_timeout(
        api_base: &str,
        repository: &RepositorySlug,
        token: GitHubToken,
        timeout: Duration,
    ) -> Result<Self, RepoKeeperError> {
        let base = parse_endpoint(api_base, "GitHub API URL")?;
        let endpoint = labels_endpoint(base, repository)?;

        Ok(Self {
            client: build_client(Some(timeout))?,
            endpoint,
            token,
        })
    }

    /// URL labels are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Appends `repos/{owner}/{repo}/labels` to the base path as escaped
/// segments, dropping any query or fragment on the base.
fn labels_endpoint(mut base: Url, repository: &RepositorySlug) -> Result<Url, RepoKeeperError> {
    base.set_query(None);
    base.set_fragment(None);
    {
        let mut segments =
            base.path_segments_mut()
                .map_err(|()| RepoKeeperError::Configuration {
                    message: format!("failed to build labels URL for {repository}"),
                })?;
        segments.pop_if_empty().extend([
            "repos",
            repository.owner().as_str(),
            repository.name().as_str(),
            "labels",
        ]);
    }
    Ok(base)
}

#[async_trait]
impl ResourceCreator for GitHubLabelCreator {
    async fn create(&self, label: &LabelDescriptor) -> SyncOutcome {
        let result = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.token.value())
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .json(label)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return SyncOutcome::Created;
                }
                classify_status(status, read_body(response).await)
            }
            Err(error) if error.is_timeout() => SyncOutcome::Timeout,
            Err(error) => SyncOutcome::NetworkError {
                message: error.to_string(),
            },
        }
    }
}

/// Maps a label API response status to an outcome.
///
/// 2xx is `Created`, 422 is `AlreadyExists`, 403 is `RateLimited`, and any
/// other status is `Fatal` carrying the body verbatim.
#[must_use]
pub fn classify_status(status: StatusCode, body: String) -> SyncOutcome {
    if status.is_success() {
        SyncOutcome::Created
    } else if status == StatusCode::UNPROCESSABLE_ENTITY {
        SyncOutcome::AlreadyExists
    } else if status == StatusCode::FORBIDDEN {
        SyncOutcome::RateLimited { body }
    } else {
        SyncOutcome::Fatal {
            status: status.as_u16(),
            body,
        }
    }
}
