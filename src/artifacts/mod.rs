//! Persistence of rendered Markdown artifacts.
//!
//! Writes are overwrites: re-running with identical content leaves the file
//! byte-identical. The target directory is created on demand.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{RepoKeeperError, io_error};
use crate::fs::open_dir;

#[cfg(any(test, feature = "test-support"))]
mod memory;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryArtifactStore;

/// File name of the consolidated document.
pub const CONSOLIDATED_FILE_NAME: &str = "summary.md";

/// Returns the artifact file name for a single pull request.
#[must_use]
pub fn individual_file_name(pull_request_number: u64) -> String {
    format!("coderabbit-summary-{pull_request_number}.md")
}

/// Destination for rendered review artifacts.
pub trait ArtifactStore {
    /// Writes the document for one pull request, returning its path.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Io`] when the artifact cannot be written.
    fn write_individual(
        &self,
        pull_request_number: u64,
        content: &str,
    ) -> Result<Utf8PathBuf, RepoKeeperError>;

    /// Writes the consolidated document, returning its path.
    ///
    /// # Errors
    ///
    /// Returns [`RepoKeeperError::Io`] when the artifact cannot be written.
    fn write_consolidated(&self, content: &str) -> Result<Utf8PathBuf, RepoKeeperError>;
}

/// Artifact store writing into a directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsArtifactStore {
    directory: Utf8PathBuf,
}

impl FsArtifactStore {
    /// Creates a store rooted at `directory`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory artifacts are written to.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    fn write_file(&self, file_name: &str, content: &str) -> Result<Utf8PathBuf, RepoKeeperError> {
        let dir = open_dir(&self.directory, true)?;
        dir.write(file_name, content).map_err(|error| {
            io_error(
                &format!("failed to write '{file_name}' in '{}'", self.directory),
                &error,
            )
        })?;

        tracing::info!("Saved summary to {file_name}");
        Ok(self.directory.join(file_name))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn write_individual(
        &self,
        pull_request_number: u64,
        content: &str,
    ) -> Result<Utf8PathBuf, RepoKeeperError> {
        self.write_file(&individual_file_name(pull_request_number), content)
    }

    fn write_consolidated(&self, content: &str) -> Result<Utf8PathBuf, RepoKeeperError> {
        self.write_file(CONSOLIDATED_FILE_NAME, content)
    }
}
