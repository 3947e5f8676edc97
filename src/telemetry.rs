//! Process-level logging setup.
//!
//! Log lines go to stderr so stdout stays free for usage output. `RUST_LOG`
//! takes precedence over the default level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::RepoKeeperError;

/// Default level when `RUST_LOG` is unset: `debug` when verbose, else `info`.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Builds the filter applied to the stderr subscriber.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy()
}

/// Installs the global `fmt` subscriber.
///
/// # Errors
///
/// Returns [`RepoKeeperError::Configuration`] when a global subscriber is
/// already installed.
pub fn init_logging(verbose: bool) -> Result<(), RepoKeeperError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| RepoKeeperError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}
