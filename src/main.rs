//! Repokeeper CLI entrypoint.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use repokeeper::{OperationMode, RepoKeeperConfig, RepoKeeperError, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "Error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RepoKeeperError> {
    let config = load_config()?;
    telemetry::init_logging(config.verbose)?;

    match config.operation_mode() {
        OperationMode::Usage => cli::usage::write_usage(),
        OperationMode::ReviewExport => cli::review_export::run(&config).await,
        OperationMode::LabelSync => cli::label_sync::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RepoKeeperError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RepoKeeperConfig, RepoKeeperError> {
    RepoKeeperConfig::load().map_err(|error| RepoKeeperError::Configuration {
        message: error.to_string(),
    })
}
