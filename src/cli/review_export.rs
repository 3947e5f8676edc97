//! Review export operation.

use repokeeper::{
    ExportOutcome, ExportRequest, FsArtifactStore, HttpReviewSource, RepoKeeperConfig,
    RepoKeeperError, ReviewExport,
};

/// Exports review summaries for the configured repository.
///
/// Arguments and the API key are validated before any request is sent.
///
/// # Errors
///
/// Returns configuration and credential errors, fetch failures, and artifact
/// write failures.
pub async fn run(config: &RepoKeeperConfig) -> Result<(), RepoKeeperError> {
    let request = ExportRequest {
        repository: config.require_repository()?,
        filter: config.pr_filter()?,
        mode: config.output_mode()?,
    };
    let api_key = config.resolve_review_api_key()?;

    let source = HttpReviewSource::new(&config.reviews_api_url, api_key)?;
    let store = FsArtifactStore::new(config.output_dir());
    let outcome = ReviewExport::new(&source, &store).run(&request).await?;

    if let ExportOutcome::Exported { artifacts } = outcome {
        tracing::debug!(
            "wrote {} artifact(s) to {}",
            artifacts.len(),
            store.directory()
        );
    }
    Ok(())
}
