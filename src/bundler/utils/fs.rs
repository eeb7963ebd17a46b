//! File system utilities for staging.
//!
//! Every helper is idempotent: re-running with the same inputs overwrites
//! instead of failing or accumulating.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Creates all of the directories of the specified path, erasing it first if specified.
pub fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path)?;
    }

    // create_dir_all already succeeds when the directory exists
    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err::<(), _>(e).fs_context("removing directory", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination. Fails if the source path is a
/// directory or doesn't exist.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(Error::GenericError(format!(
            "{} does not exist or is not a file",
            from.display()
        )));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).fs_context("copying file to", to)?;
    Ok(())
}

/// Writes `bytes` to `path`, creating parent directories and replacing any
/// previous content.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }
    let mut file = fs::File::create(path).fs_context("creating file", path)?;
    file.write_all(bytes).fs_context("writing file", path)?;
    file.flush().fs_context("flushing file", path)?;
    Ok(())
}
