//! Usage text for invocations without a repository.

use std::io::{self, Write};

use repokeeper::RepoKeeperError;

/// Short usage summary written to stdout.
pub const USAGE: &str = "\
Usage: repokeeper --repository <OWNER/REPO> [OPTIONS]

Export CodeRabbit review summaries:
  repokeeper -r owner/repo [-p <PR>] [-o individual|consolidated|both] [-d <DIR>]

Create the standard label set:
  repokeeper -r owner/repo --labels [--labels-file <FILE>] [--abort-on-rate-limit]

Credentials are read from CODERABBIT_API_KEY and GITHUB_TOKEN (or
secrets/github-token.json). Run with --help for every option.";

/// Writes the usage summary to stdout.
pub fn write_usage() -> Result<(), RepoKeeperError> {
    let mut stdout = io::stdout().lock();
    write_usage_to(&mut stdout)
}

/// Writes the usage summary to the given writer.
pub fn write_usage_to<W: Write>(writer: &mut W) -> Result<(), RepoKeeperError> {
    writeln!(writer, "{USAGE}").map_err(|error| RepoKeeperError::Io {
        message: error.to_string(),
    })
}
