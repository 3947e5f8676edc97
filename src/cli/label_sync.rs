//! Label synchronization operation.

use repokeeper::{GitHubLabelCreator, LabelSynchronizer, RepoKeeperConfig, RepoKeeperError};

/// Creates the configured label catalog in the repository.
///
/// The token is validated before any request is issued.
///
/// # Errors
///
/// Returns credential and configuration errors, and
/// [`RepoKeeperError::LabelSyncIncomplete`] when any label failed or was
/// skipped.
pub async fn run(config: &RepoKeeperConfig) -> Result<(), RepoKeeperError> {
    let repository = config.require_repository()?;
    let token = config.resolve_github_token()?;
    let catalog = config.label_catalog()?;

    let creator = GitHubLabelCreator::new(&config.github_api_url, &repository, token)?;
    tracing::info!("Synchronizing {} label(s) in {repository}", catalog.len());

    let report = LabelSynchronizer::new(&creator, &catalog, config.rate_limit_policy())
        .run()
        .await;

    if report.has_failures() {
        return Err(RepoKeeperError::LabelSyncIncomplete {
            failed: report.failures() + report.skipped.len(),
        });
    }
    Ok(())
}
