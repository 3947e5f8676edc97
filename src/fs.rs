//! Filesystem helpers built on `cap-std`.
//!
//! Directories are opened with ambient authority, so relative paths follow
//! the current directory (including `..` components) and absolute paths are
//! used as given. File access then goes through the returned handle.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::{RepoKeeperError, io_error};

/// Opens `path` as a directory, creating it (and any parents) first when
/// `create` is set.
///
/// Creation is idempotent: an existing directory is reused without error.
///
/// # Errors
///
/// Returns [`RepoKeeperError::Io`] when the directory cannot be created or
/// opened.
pub(crate) fn open_dir(path: &Utf8Path, create: bool) -> Result<Dir, RepoKeeperError> {
    let target = if path.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        path
    };

    if create {
        Dir::create_ambient_dir_all(target, ambient_authority())
            .map_err(|error| io_error(&format!("failed to create directory '{path}'"), &error))?;
    }

    Dir::open_ambient_dir(target, ambient_authority())
        .map_err(|error| io_error(&format!("failed to open directory '{path}'"), &error))
}

/// Reads a UTF-8 file, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns [`RepoKeeperError::Io`] for any failure other than a missing file.
pub(crate) fn read_optional(path: &Utf8Path) -> Result<Option<String>, RepoKeeperError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| RepoKeeperError::Io {
        message: format!("invalid path '{path}': no file name"),
    })?;

    let dir = match open_dir(parent, false) {
        Ok(dir) => dir,
        Err(_) if !parent.exists() => return Ok(None),
        Err(error) => return Err(error),
    };

    match dir.read_to_string(file_name) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(io_error(&format!("failed to read '{path}'"), &error)),
    }
}
