//! CLI operation mode handlers.
//!
//! - [`review_export`]: write review summaries for a repository
//! - [`label_sync`]: create the label catalog in a repository
//! - [`usage`]: usage text shown when no repository is given

pub mod label_sync;
pub mod review_export;
pub mod usage;
