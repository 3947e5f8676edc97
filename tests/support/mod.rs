//! Shared test utilities.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub mod logs;
pub mod runtime;

/// Creates a temporary directory for artifact tests.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// Returns `name` below `dir` as a UTF-8 path.
///
/// # Panics
///
/// Panics if the temporary path is not valid UTF-8.
pub fn utf8_child(dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(name))
        .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()))
}

/// Lists the file names in `dir`, sorted.
///
/// # Panics
///
/// Panics if the directory cannot be read.
pub fn file_names(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|error| panic!("failed to read {dir}: {error}"))
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
