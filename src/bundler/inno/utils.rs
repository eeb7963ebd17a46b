//! Inno Setup helper functions.
//!
//! Path layout, label escaping, runtime DLL lookup and script writing.

use crate::bundler::{
    error::Result,
    settings::BuildMode,
    utils::{fs, text},
};
use std::path::{Path, PathBuf};

/// Installer output root, relative to the project directory.
pub const BUILD_ROOT: &str = "build/windows/x64/installer";

/// Root of `flutter build windows` output, relative to the project directory.
pub const APP_BUILD_ROOT: &str = "build/windows/x64/runner";

/// File name of the generated script.
pub const SCRIPT_FILE: &str = "inno-script.iss";

/// MSVC runtime DLLs shipped next to the app when present on the host.
pub const RUNTIME_DLLS: [&str; 3] = ["msvcp140.dll", "vcruntime140.dll", "vcruntime140_1.dll"];

/// Installer output directory for a build mode.
pub fn output_dir(work_dir: &Path, mode: BuildMode) -> PathBuf {
    work_dir.join(BUILD_ROOT).join(mode.dir_name())
}

/// Directory holding the built app for a build mode.
pub fn app_build_dir(work_dir: &Path, mode: BuildMode) -> PathBuf {
    work_dir.join(APP_BUILD_ROOT).join(mode.dir_name())
}

/// The host's `System32` directory.
///
/// Uses `%SystemRoot%`, falling back to `C:\Windows`.
pub fn system_dir() -> PathBuf {
    std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
        .join("System32")
}

/// Default staging directory for one application id.
///
/// Stable across runs so repeated builds emit identical paths.
pub fn default_staging_dir(app_id: &str) -> PathBuf {
    std::env::temp_dir().join("inno_bundle").join(app_id)
}

/// Doubles `&` so wizard labels show it literally instead of as an accelerator.
pub fn escape_label(text: &str) -> String {
    text.replace('&', "&&")
}

/// Makes free text safe as a `[Setup]` directive value.
///
/// Line breaks fold into spaces and `{` is doubled so the compiler does not
/// read it as a constant.
pub fn escape_value(text: &str) -> String {
    text::single_line(text).replace('{', "{{")
}

/// Maps the admin flag to a `PrivilegesRequired` value.
pub fn map_privileges(admin: bool) -> &'static str {
    if admin { "admin" } else { "lowest" }
}

/// Maps a boolean to `yes` / `no`.
pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Write file with UTF-8 BOM.
///
/// The compiler only reads a script as UTF-8 when it starts with the BOM
/// (EF BB BF); without it non-ASCII names are mangled.
pub fn write_utf8_bom(path: &Path, content: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity(content.len() + 3);
    bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
    bytes.extend_from_slice(content.as_bytes());
    fs::write_file(path, &bytes)
}
