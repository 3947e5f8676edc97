//! Repokeeper library crate.
//!
//! Two independent pipelines share one shape (fetch, transform, apply,
//! classify):
//!
//! - [`reviews`] fetches CodeRabbit review summaries for a repository and
//!   writes them as Markdown artifacts through an [`ArtifactStore`].
//! - [`labels`] creates a desired label catalog in a GitHub repository
//!   through a [`ResourceCreator`], classifying each attempt as a
//!   [`SyncOutcome`].
//!
//! Filesystem and network effects sit behind those two capability traits so
//! the pipelines can be exercised with in-memory fakes.

pub mod artifacts;
pub mod config;
pub mod credentials;
pub mod error;
mod fs;
mod http_utils;
pub mod labels;
pub mod repository;
pub mod reviews;
pub mod telemetry;

pub use artifacts::{ArtifactStore, FsArtifactStore};
pub use config::{OperationMode, RepoKeeperConfig};
pub use credentials::{ApiKey, GitHubToken};
pub use error::RepoKeeperError;
pub use labels::{
    GitHubLabelCreator, LabelCatalog, LabelDescriptor, LabelSynchronizer, RateLimitPolicy,
    ResourceCreator, SyncOutcome, SyncReport,
};
pub use repository::RepositorySlug;
pub use reviews::{
    ExportOutcome, ExportRequest, HttpReviewSource, OutputMode, PullRequestFilter, ReviewExport,
    ReviewRecord, ReviewSource,
};

#[cfg(any(test, feature = "test-support"))]
pub use artifacts::MemoryArtifactStore;
