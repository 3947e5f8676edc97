//! Review export pipeline: fetch, filter, format, write.

use std::fmt;
use std::str::FromStr;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};

use crate::artifacts::ArtifactStore;
use crate::error::RepoKeeperError;
use crate::repository::RepositorySlug;

use super::filter::{PullRequestFilter, select_reviews};
use super::gateway::ReviewSource;
use super::markdown::{format_consolidated, format_individual};
use super::model::ReviewRecord;
use super::ordering::{ReviewGroup, group_reviews};

/// Log message emitted when the service returns no reviews at all.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews found for this repository.";

/// Which artifacts an export run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One document per pull request.
    Individual,
    /// A single grouped document.
    Consolidated,
    /// Both kinds of document.
    #[default]
    Both,
}

impl OutputMode {
    /// Returns true when per-pull-request documents are written.
    #[must_use]
    pub const fn writes_individual(self) -> bool {
        matches!(self, Self::Individual | Self::Both)
    }

    /// Returns true when the consolidated document is written.
    #[must_use]
    pub const fn writes_consolidated(self) -> bool {
        matches!(self, Self::Consolidated | Self::Both)
    }
}

impl FromStr for OutputMode {
    type Err = RepoKeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "consolidated" => Ok(Self::Consolidated),
            "both" => Ok(Self::Both),
            _ => Err(RepoKeeperError::InvalidArgument {
                argument: format!(
                    "unsupported output mode '{s}' (expected individual, consolidated, or both)"
                ),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Individual => "individual",
            Self::Consolidated => "consolidated",
            Self::Both => "both",
        };
        f.write_str(label)
    }
}

/// Parameters of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Repository whose reviews are exported.
    pub repository: RepositorySlug,
    /// Optional pull request filter.
    pub filter: Option<PullRequestFilter>,
    /// Artifacts to produce.
    pub mode: OutputMode,
}

/// Result of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The service returned no reviews; nothing was written.
    NoReviews,
    /// Reviews exist, but none for the filtered pull request.
    NoMatchingReviews {
        /// The filter that matched nothing.
        filter: PullRequestFilter,
    },
    /// Artifacts were written.
    Exported {
        /// Paths of the written artifacts, in write order.
        artifacts: Vec<Utf8PathBuf>,
    },
}

/// Runs the review export pipeline against a source and an artifact store.
pub struct ReviewExport<'client, Source, Store>
where
    Source: ReviewSource + ?Sized,
    Store: ArtifactStore + ?Sized,
{
    source: &'client Source,
    store: &'client Store,
}

impl<'client, Source, Store> ReviewExport<'client, Source, Store>
where
    Source: ReviewSource + ?Sized,
    Store: ArtifactStore + ?Sized,
{
    /// Create a pipeline over the provided source and store.
    #[must_use]
    pub const fn new(source: &'client Source, store: &'client Store) -> Self {
        Self { source, store }
    }

    /// Fetches, filters, renders, and writes reviews for the request.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures, which abort the run before anything is
    /// written, and artifact write failures.
    pub async fn run(&self, request: &ExportRequest) -> Result<ExportOutcome, RepoKeeperError> {
        self.run_at(request, Utc::now()).await
    }

    /// Same as [`Self::run`] with an explicit generation timestamp for the
    /// consolidated document.
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub async fn run_at(
        &self,
        request: &ExportRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportOutcome, RepoKeeperError> {
        let reviews = self.source.fetch_reviews(&request.repository).await?;
        if reviews.is_empty() {
            tracing::info!("{NO_REVIEWS_MESSAGE}");
            return Ok(ExportOutcome::NoReviews);
        }

        let selected = select_reviews(&reviews, request.filter);
        if let Some(filter) = request.filter
            && selected.is_empty()
        {
            tracing::info!("No review found for PR {filter}.");
            return Ok(ExportOutcome::NoMatchingReviews { filter });
        }

        tracing::debug!(
            "exporting {} of {} review(s) for {} in {} mode",
            selected.len(),
            reviews.len(),
            request.repository,
            request.mode
        );

        let mut artifacts = Vec::new();
        if request.mode.writes_individual() {
            artifacts.extend(self.write_individual(&selected)?);
        }
        if request.mode.writes_consolidated() {
            let document = format_consolidated(&selected, generated_at);
            artifacts.push(self.store.write_consolidated(&document)?);
        }

        Ok(ExportOutcome::Exported { artifacts })
    }

    /// Writes one document per pull request, rendering its most recent
    /// review.
    fn write_individual(
        &self,
        selected: &[&ReviewRecord],
    ) -> Result<Vec<Utf8PathBuf>, RepoKeeperError> {
        group_reviews(selected)
            .iter()
            .filter_map(ReviewGroup::latest)
            .map(|record| {
                self.store
                    .write_individual(record.pull_request_number, &format_individual(record))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
