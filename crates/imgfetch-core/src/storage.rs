//! Disk I/O and file lifecycle for the destination file.
//!
//! The body is written straight to its final name, truncating any existing
//! file. A file that fails to write completely, or later fails validation, is
//! removed again.

use crate::error::UnexpectedError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), UnexpectedError> {
    fs::create_dir_all(dir).map_err(|source| UnexpectedError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path`, overwriting any existing file.
/// On failure, whatever was written is removed before the error is returned.
pub fn write_body(path: &Path, data: &[u8]) -> Result<(), UnexpectedError> {
    let result = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .and_then(|mut f| {
            f.write_all(data)?;
            f.sync_all()
        });
    if let Err(source) = result {
        discard(path);
        return Err(UnexpectedError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Reads the written file back for validation.
pub fn read_back(path: &Path) -> Result<Vec<u8>, UnexpectedError> {
    fs::read(path).map_err(|source| UnexpectedError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes `path`, ignoring a file that is already gone.
pub fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("removed {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("failed to remove {}: {}", path.display(), e),
    }
}
