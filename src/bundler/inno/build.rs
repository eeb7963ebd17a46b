//! Installer compilation.
//!
//! Compiles a generated script into an installer executable with ISCC.

use crate::bundler::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Run ISCC on a script.
///
/// The installer lands in the script's `OutputDir`; ISCC's own output is
/// passed through to the terminal.
pub fn run_iscc(iscc: &Path, script: &Path) -> Result<()> {
    log::info!("Running ISCC on {}...", script.display());

    let status = Command::new(iscc)
        .arg(script)
        .status()
        .map_err(|e| Error::CommandFailed {
            command: iscc.display().to_string(),
            error: e,
        })?;

    if !status.success() {
        return Err(Error::GenericError(format!(
            "ISCC compilation failed with exit code: {:?}",
            status.code()
        )));
    }

    Ok(())
}
