//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repokeeper.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPOKEEPER_*`, plus the conventional
//!    `CODERABBIT_API_KEY` and `GITHUB_TOKEN` as fallbacks
//! 4. **Command-line arguments** – e.g. `--repository`/`-r`, `--pr`/`-p`
//!
//! # Configuration File
//!
//! ```toml
//! repository = "octocat/hello-world"
//! output = "consolidated"
//! output_dir = "reports"
//! secrets_file = "secrets/github-token.json"
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::credentials::{ApiKey, GitHubToken, read_secrets_token};
use crate::error::RepoKeeperError;
use crate::labels::{DEFAULT_GITHUB_API_URL, LabelCatalog, RateLimitPolicy};
use crate::repository::RepositorySlug;
use crate::reviews::{DEFAULT_REVIEWS_API_URL, OutputMode, PullRequestFilter};

/// Fallback environment variable for the review service API key.
pub const REVIEW_API_KEY_ENV: &str = "CODERABBIT_API_KEY";

/// Fallback environment variable for the GitHub token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Default location of the JSON secrets file holding a GitHub token.
pub const DEFAULT_SECRETS_FILE: &str = "secrets/github-token.json";

const DEFAULT_OUTPUT_DIR: &str = ".";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// No repository was given; print usage and exit successfully.
    Usage,
    /// Export review summaries to Markdown.
    ReviewExport,
    /// Create the label catalog in the repository.
    LabelSync,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// Boolean flags are not read from the environment, since `ortho_config`
/// does not load boolean values from it.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPOKEEPER",
    discovery(
        dotfile_name = ".repokeeper.toml",
        config_file_name = "repokeeper.toml",
        app_name = "repokeeper"
    )
)]
pub struct RepoKeeperConfig {
    /// Target repository as `owner/repo`.
    ///
    /// Can be provided via:
    /// - CLI: `--repository <OWNER/REPO>` or `-r <OWNER/REPO>`
    /// - Environment: `REPOKEEPER_REPOSITORY`
    /// - Config file: `repository = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repository: Option<String>,

    /// Restrict the export to a single pull request number.
    #[ortho_config(cli_short = 'p')]
    pub pr: Option<String>,

    /// Artifacts to write: `individual`, `consolidated`, or `both`.
    #[ortho_config(cli_short = 'o')]
    pub output: String,

    /// Directory receiving the Markdown artifacts. Created when missing.
    #[ortho_config(cli_short = 'd')]
    pub output_dir: String,

    /// Synchronize the label catalog instead of exporting reviews.
    #[ortho_config(cli_short = 'l')]
    pub labels: bool,

    /// JSON file replacing the built-in label catalog.
    #[ortho_config()]
    pub labels_file: Option<String>,

    /// Stop the label batch at the first rate-limit response.
    #[ortho_config()]
    pub abort_on_rate_limit: bool,

    /// Review service API key.
    ///
    /// Can be provided via:
    /// - Environment: `REPOKEEPER_CODERABBIT_API_KEY` or `CODERABBIT_API_KEY`
    /// - Config file: `coderabbit_api_key = "..."`
    #[ortho_config()]
    pub coderabbit_api_key: Option<String>,

    /// GitHub token used for label creation.
    ///
    /// Can be provided via:
    /// - CLI: `--github-token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPOKEEPER_GITHUB_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `github_token = "..."`
    /// - Secrets file: `{"token": "..."}` at `secrets_file`
    #[ortho_config(cli_short = 't')]
    pub github_token: Option<String>,

    /// JSON file consulted when no other token source is set.
    #[ortho_config()]
    pub secrets_file: String,

    /// Review history endpoint.
    #[ortho_config()]
    pub reviews_api_url: String,

    /// GitHub REST API base URL.
    #[ortho_config()]
    pub github_api_url: String,

    /// Enables debug logging.
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl Default for RepoKeeperConfig {
    fn default() -> Self {
        Self {
            repository: None,
            pr: None,
            output: OutputMode::default().to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
            labels: false,
            labels_file: None,
            abort_on_rate_limit: false,
            coderabbit_api_key: None,
            github_token: None,
            secrets_file: DEFAULT_SECRETS_FILE.to_owned(),
            reviews_api_url: DEFAULT_REVIEWS_API_URL.to_owned(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_owned(),
            verbose: false,
        }
    }
}

impl RepoKeeperConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.repository.is_none() {
            OperationMode::Usage
        } else if self.labels {
            OperationMode::LabelSync
        } else {
            OperationMode::ReviewExport
        }
    }

    /// Returns the parsed repository slug.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Configuration`] when no repository is set
    /// and [`RepoKeeperError::InvalidRepository`] when it is malformed.
    pub fn require_repository(&self) -> Result<RepositorySlug, RepoKeeperError> {
        let raw = self
            .repository
            .as_deref()
            .ok_or_else(|| RepoKeeperError::Configuration {
                message: "repository is required (use --repository or -r)".to_owned(),
            })?;
        RepositorySlug::parse(raw)
    }

    /// Parses the output mode selector.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::InvalidArgument`] for unrecognised values.
    pub fn output_mode(&self) -> Result<OutputMode, RepoKeeperError> {
        self.output.parse()
    }

    /// Parses the optional pull request filter.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::InvalidArgument`] when the filter is not a
    /// pull request number.
    pub fn pr_filter(&self) -> Result<Option<PullRequestFilter>, RepoKeeperError> {
        self.pr.as_deref().map(str::parse).transpose()
    }

    /// Directory receiving artifacts.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.output_dir)
    }

    /// Rate-limit policy selected for label synchronization.
    #[must_use]
    pub const fn rate_limit_policy(&self) -> RateLimitPolicy {
        if self.abort_on_rate_limit {
            RateLimitPolicy::Abort
        } else {
            RateLimitPolicy::Continue
        }
    }

    /// Loads the configured label catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Propagates catalog loading failures.
    pub fn label_catalog(&self) -> Result<LabelCatalog, RepoKeeperError> {
        self.labels_file.as_deref().map_or_else(
            || Ok(LabelCatalog::standard()),
            |path| LabelCatalog::load(Utf8Path::new(path)),
        )
    }

    /// Resolves the review API key from configuration or
    /// `CODERABBIT_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::MissingCredential`] when no source provides
    /// a non-blank key.
    pub fn resolve_review_api_key(&self) -> Result<ApiKey, RepoKeeperError> {
        let key = self
            .coderabbit_api_key
            .clone()
            .or_else(|| env::var(REVIEW_API_KEY_ENV).ok());
        ApiKey::require(key.as_deref())
    }

    /// Resolves and validates the GitHub token.
    ///
    /// Sources are tried in order: configuration (CLI, `REPOKEEPER_GITHUB_TOKEN`,
    /// config file), `GITHUB_TOKEN`, then the secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::MissingCredential`] when no source provides
    /// a token, [`RepoKeeperError::InvalidCredentialFormat`] when the token is
    /// malformed, and a configuration error for an unreadable secrets file.
    pub fn resolve_github_token(&self) -> Result<GitHubToken, RepoKeeperError> {
        let configured = self
            .github_token
            .clone()
            .or_else(|| env::var(GITHUB_TOKEN_ENV).ok())
            .filter(|token| !token.is_empty());

        let token = configured.map_or_else(
            || {
                read_secrets_token(Utf8Path::new(&self.secrets_file))
                    .map(Option::unwrap_or_default)
            },
            Ok,
        )?;
        GitHubToken::new(token)
    }
}
