//! Label taxonomy reconciliation.
//!
//! A [`LabelCatalog`] describes the desired labels; the
//! [`LabelSynchronizer`] asks a [`ResourceCreator`] to create each one and
//! classifies the result as a [`SyncOutcome`]. Existing labels are left
//! untouched: the remote API only supports create, and 422 means the label
//! is already there.

pub mod catalog;
pub mod creator;
pub mod outcome;
pub mod sync;

pub use catalog::{LabelCatalog, LabelDescriptor};
pub use creator::{
    DEFAULT_GITHUB_API_URL, DEFAULT_TIMEOUT, GitHubLabelCreator, ResourceCreator, classify_status,
};
pub use outcome::SyncOutcome;
pub use sync::{LabelSynchronizer, RateLimitPolicy, SyncReport};

#[cfg(test)]
pub use creator::MockResourceCreator;
