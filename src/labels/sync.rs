//! Sequential create-or-skip reconciliation of a label catalog.

use super::catalog::LabelCatalog;
use super::creator::ResourceCreator;
use super::outcome::SyncOutcome;

/// What to do with the rest of the batch after a `RateLimited` outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RateLimitPolicy {
    /// Record the failure and keep going.
    #[default]
    Continue,
    /// Stop issuing requests; remaining descriptors are reported as skipped.
    Abort,
}

/// Per-label results of one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Outcome for every attempted label, in catalog order.
    pub results: Vec<(String, SyncOutcome)>,
    /// Labels not attempted because the batch was aborted.
    pub skipped: Vec<String>,
}

impl SyncReport {
    /// Number of labels created by this run.
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, SyncOutcome::Created))
    }

    /// Number of labels that were already present.
    #[must_use]
    pub fn already_existing(&self) -> usize {
        self.count(|outcome| matches!(outcome, SyncOutcome::AlreadyExists))
    }

    /// Number of attempts that did not succeed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.count(|outcome| !outcome.is_success())
    }

    /// Returns true when any attempt failed or any label was skipped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures() > 0 || !self.skipped.is_empty()
    }

    fn count(&self, predicate: impl Fn(&SyncOutcome) -> bool) -> usize {
        self.results
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Drives one pass over a catalog, one request at a time.
pub struct LabelSynchronizer<'client, Creator>
where
    Creator: ResourceCreator + ?Sized,
{
    creator: &'client Creator,
    catalog: &'client LabelCatalog,
    policy: RateLimitPolicy,
}

impl<'client, Creator> LabelSynchronizer<'client, Creator>
where
    Creator: ResourceCreator + ?Sized,
{
    /// Create a synchronizer over the provided creator and catalog.
    #[must_use]
    pub const fn new(
        creator: &'client Creator,
        catalog: &'client LabelCatalog,
        policy: RateLimitPolicy,
    ) -> Self {
        Self {
            creator,
            catalog,
            policy,
        }
    }

    /// Attempts every descriptor in catalog order, logging each outcome.
    ///
    /// Attempts never raise; failures are collected in the report.
    pub async fn run(&self) -> SyncReport {
        let mut report = SyncReport::default();
        let mut labels = self.catalog.iter();

        for label in labels.by_ref() {
            let outcome = self.creator.create(label).await;
            log_outcome(&label.name, &outcome);
            let abort = self.policy == RateLimitPolicy::Abort
                && matches!(outcome, SyncOutcome::RateLimited { .. });
            report.results.push((label.name.clone(), outcome));
            if abort {
                break;
            }
        }

        report.skipped = labels.map(|label| label.name.clone()).collect();
        if !report.skipped.is_empty() {
            tracing::warn!(
                "Rate limited; skipped {} remaining label(s): {}",
                report.skipped.len(),
                report.skipped.join(", ")
            );
        }

        tracing::info!(
            "Label sync finished: {} created, {} already existed, {} failed, {} skipped",
            report.created(),
            report.already_existing(),
            report.failures(),
            report.skipped.len()
        );
        report
    }
}

fn log_outcome(name: &str, outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Created => tracing::info!("Created label: {name}"),
        SyncOutcome::AlreadyExists => tracing::info!("Label already exists: {name}"),
        SyncOutcome::RateLimited { body } => {
            tracing::warn!("Rate limit exceeded or forbidden creating {name}: {body}");
        }
        SyncOutcome::Fatal { status, body } => {
            tracing::error!("Failed to create label {name}: {status} {body}");
        }
        SyncOutcome::NetworkError { message } => {
            tracing::error!("Network error creating label {name}: {message}");
        }
        SyncOutcome::Timeout => tracing::error!("Timed out creating label {name}"),
    }
}
