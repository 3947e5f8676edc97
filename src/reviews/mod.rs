//! Review summary export.
//!
//! Review records are fetched from the review history service, optionally
//! narrowed to one pull request, rendered to Markdown, and written as
//! per-pull-request documents and/or a consolidated document.

pub mod export;
pub mod filter;
pub mod gateway;
pub mod markdown;
pub mod model;
pub mod ordering;

pub use export::{ExportOutcome, ExportRequest, NO_REVIEWS_MESSAGE, OutputMode, ReviewExport};
pub use filter::{PullRequestFilter, select_reviews};
pub use gateway::{DEFAULT_REVIEWS_API_URL, HttpReviewSource, ReviewSource};
pub use markdown::{NO_SUMMARY_PLACEHOLDER, format_consolidated, format_individual};
pub use model::ReviewRecord;
pub use ordering::{ReviewGroup, group_reviews};

#[cfg(test)]
pub use gateway::MockReviewSource;
