//! In-memory artifact store for tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use camino::Utf8PathBuf;

use crate::error::RepoKeeperError;

use super::{ArtifactStore, CONSOLIDATED_FILE_NAME, individual_file_name};

/// Artifact store that keeps written documents in memory, keyed by file
/// name, and records the order of writes.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: Mutex<BTreeMap<String, String>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryArtifactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored file names in sorted order.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the content of `file_name`, if it was written.
    #[must_use]
    pub fn content(&self, file_name: &str) -> Option<String> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(file_name).cloned())
    }

    /// Returns every write performed, in order, including overwrites.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    fn store(&self, file_name: String, content: &str) -> Result<Utf8PathBuf, RepoKeeperError> {
        self.files
            .lock()
            .map_err(poisoned)?
            .insert(file_name.clone(), content.to_owned());
        self.writes.lock().map_err(poisoned)?.push(file_name.clone());
        Ok(Utf8PathBuf::from(file_name))
    }
}

fn poisoned<T>(_error: T) -> RepoKeeperError {
    RepoKeeperError::Io {
        message: "memory artifact store lock poisoned".to_owned(),
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_individual(
        &self,
        pull_request_number: u64,
        content: &str,
    ) -> Result<Utf8PathBuf, RepoKeeperError> {
        self.store(individual_file_name(pull_request_number), content)
    }

    fn write_consolidated(&self, content: &str) -> Result<Utf8PathBuf, RepoKeeperError> {
        self.store(CONSOLIDATED_FILE_NAME.to_owned(), content)
    }
}
