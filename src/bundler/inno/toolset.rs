//! Inno Setup compiler lookup.

use crate::bundler::error::{Error, Result};
use std::path::PathBuf;

/// Default install location of Inno Setup 6.
const DEFAULT_ISCC: &str = r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe";

/// Locates `ISCC.exe`.
///
/// Searches `PATH` first, then the default Inno Setup 6 install directory.
pub fn find_iscc() -> Result<PathBuf> {
    if let Ok(path) = which::which("iscc") {
        log::debug!("Found ISCC at: {}", path.display());
        return Ok(path);
    }

    let fallback = PathBuf::from(DEFAULT_ISCC);
    if fallback.is_file() {
        log::debug!("Using ISCC from default install path: {}", fallback.display());
        return Ok(fallback);
    }

    Err(Error::GenericError(
        "ISCC.exe not found. Install Inno Setup 6 from https://jrsoftware.org/isinfo.php \
         or add its directory to PATH"
            .into(),
    ))
}
