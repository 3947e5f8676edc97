//! Gateway for loading review history from the review service.
//!
//! The trait keeps the export pipeline testable with mocks while
//! [`HttpReviewSource`] performs the real HTTP request.

use async_trait::async_trait;
use http::StatusCode;
use http::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::credentials::ApiKey;
use crate::error::RepoKeeperError;
use crate::http_utils::{build_client, map_transport_error, parse_endpoint, read_body};
use crate::repository::RepositorySlug;

use super::model::{ApiReviewHistory, ReviewRecord};

/// Default review history endpoint.
pub const DEFAULT_REVIEWS_API_URL: &str = "https://api.coderabbit.ai/review-history";

/// Source of review records for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch every review record the service holds for `repository`.
    async fn fetch_reviews(
        &self,
        repository: &RepositorySlug,
    ) -> Result<Vec<ReviewRecord>, RepoKeeperError>;
}

/// `reqwest`-backed review history client.
pub struct HttpReviewSource {
    client: Client,
    endpoint: Url,
    api_key: ApiKey,
}

impl HttpReviewSource {
    /// Creates a client for the given endpoint and API key.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when the endpoint is not a
    /// valid URL or the HTTP client cannot be constructed.
    pub fn new(endpoint: &str, api_key: ApiKey) -> Result<Self, RepoKeeperError> {
        Ok(Self {
            client: build_client(None)?,
            endpoint: parse_endpoint(endpoint, "reviews API URL")?,
            api_key,
        })
    }
}

#[async_trait]
impl ReviewSource for HttpReviewSource {
    async fn fetch_reviews(
        &self,
        repository: &RepositorySlug,
    ) -> Result<Vec<ReviewRecord>, RepoKeeperError> {
        tracing::debug!("fetching review history for {repository} from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .bearer_auth(self.api_key.value())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .query(&[("repository", repository.to_string())])
            .send()
            .await
            .map_err(|error| map_transport_error("review history request", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(map_status_error(status, body));
        }

        let history: ApiReviewHistory =
            response
                .json()
                .await
                .map_err(|error| RepoKeeperError::Decode {
                    message: format!("review history: {error}"),
                })?;

        Ok(history.into())
    }
}

fn map_status_error(status: StatusCode, body: String) -> RepoKeeperError {
    if status == StatusCode::FORBIDDEN {
        RepoKeeperError::RateLimited { body }
    } else {
        RepoKeeperError::Api {
            status: status.as_u16(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{HttpReviewSource, ReviewSource};
    use crate::credentials::ApiKey;
    use crate::error::RepoKeeperError;
    use crate::repository::RepositorySlug;

    #[fixture]
    fn repository() -> RepositorySlug {
        RepositorySlug::parse("test/repo").expect("slug should parse")
    }

    fn source_for(server: &MockServer) -> HttpReviewSource {
        let key = ApiKey::new("test-api-key").expect("key should validate");
        HttpReviewSource::new(&format!("{}/review-history", server.uri()), key)
            .expect("source should build")
    }

    #[rstest]
    #[tokio::test]
    async fn fetches_reviews_with_bearer_and_repository(repository: RepositorySlug) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/review-history"))
            .and(query_param("repository", "test/repo"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "reviews": [
                    {
                        "pull_request_number": 123,
                        "summary": "This is a test summary",
                        "created_at": "2025-05-01T12:00:00Z"
                    },
                    {
                        "pull_request_number": "456",
                        "created_at": "2025-05-01T13:00:00Z",
                        "affected_files": ["src/main.rs"]
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reviews = source_for(&server)
            .fetch_reviews(&repository)
            .await
            .expect("fetch should succeed");

        let numbers: Vec<u64> = reviews.iter().map(|r| r.pull_request_number).collect();
        assert_eq!(numbers, vec![123, 456]);
        assert_eq!(
            reviews.last().and_then(|r| r.listed_files()).map(<[String]>::len),
            Some(1)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn absent_reviews_field_is_empty(repository: RepositorySlug) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let reviews = source_for(&server)
            .fetch_reviews(&repository)
            .await
            .expect("fetch should succeed");

        assert!(reviews.is_empty());
    }

    #[rstest]
    #[case::forbidden(403, RepoKeeperError::RateLimited { body: "slow down".to_owned() })]
    #[case::server_error(500, RepoKeeperError::Api { status: 500, body: "slow down".to_owned() })]
    #[tokio::test]
    async fn error_statuses_carry_the_body(
        repository: RepositorySlug,
        #[case] status: u16,
        #[case] expected: RepoKeeperError,
    ) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string("slow down"))
            .mount(&server)
            .await;

        let error = source_for(&server)
            .fetch_reviews(&repository)
            .await
            .expect_err("fetch should fail");

        assert_eq!(error, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_payload_is_a_decode_error(repository: RepositorySlug) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let error = source_for(&server)
            .fetch_reviews(&repository)
            .await
            .expect_err("fetch should fail");

        assert!(matches!(error, RepoKeeperError::Decode { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn refused_connection_is_a_network_error(repository: RepositorySlug) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("port should bind");
        let address = listener.local_addr().expect("address should be available");
        drop(listener);

        let key = ApiKey::new("test-api-key").expect("key should validate");
        let source = HttpReviewSource::new(&format!("http://{address}/review-history"), key)
            .expect("source should build");

        let error = source
            .fetch_reviews(&repository)
            .await
            .expect_err("fetch should fail");

        assert!(matches!(error, RepoKeeperError::Network { .. }));
    }
}
