//! Windows installer creation with Inno Setup.
//!
//! # Module Organization
//!
//! - `template` - preamble and `[Setup]` template constants
//! - `sections` - renderers for each script section
//! - `script` - [`ScriptBuilder`], section assembly and staging
//! - `toolset` - ISCC lookup
//! - `build` - ISCC execution
//! - `utils` - layout constants, escaping, BOM writing

mod build;
mod script;
mod sections;
mod template;
mod toolset;
mod utils;

pub use script::ScriptBuilder;
pub use utils::{APP_BUILD_ROOT, BUILD_ROOT, RUNTIME_DLLS, SCRIPT_FILE, app_build_dir, output_dir};

use crate::bundler::{error::Result, settings::ResolvedConfig};
use std::path::{Path, PathBuf};

/// Bundle a built app as an Inno Setup installer.
///
/// # Process
///
/// 1. Generate the script from `app_dir` (staging icon and runtime DLLs)
/// 2. If the configuration asks for an installer, locate ISCC and compile
///
/// # Returns
///
/// Path of the generated script
pub fn bundle_project(config: &ResolvedConfig, work_dir: &Path, app_dir: &Path) -> Result<PathBuf> {
    log::info!("Building Inno Setup installer for {}", config.display_name());

    let script = ScriptBuilder::new(config, app_dir).work_dir(work_dir).build()?;

    if config.build_installer() {
        let iscc = toolset::find_iscc()?;
        build::run_iscc(&iscc, &script)?;
        log::info!(
            "✓ Created installer: {}",
            output_dir(work_dir, config.build_mode())
                .join(format!("{}.exe", config.installer_name()))
                .display()
        );
    } else {
        log::info!("Skipping installer compilation");
    }

    Ok(script)
}
