//! Build mode, tri-state page flags and installer icon source.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Flutter build mode of the bundled application.
///
/// Only selects the output sub-directory; script generation is identical
/// across modes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Profile,
    #[default]
    Release,
}

impl BuildMode {
    /// Lowercase name, as passed to `flutter build windows --<mode>`.
    pub fn name(self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Profile => "profile",
            BuildMode::Release => "release",
        }
    }

    /// Directory name used under `build/windows/x64/...`.
    pub fn dir_name(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Profile => "Profile",
            BuildMode::Release => "Release",
        }
    }
}

/// Wizard page switch that also accepts `auto`.
///
/// # Configuration
///
/// ```yaml
/// inno_bundle:
///   disable_dir_page: auto  # or "yes" / "no"
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    /// Let the compiler decide (hide the page on upgrades).
    #[default]
    Auto,
    Yes,
    No,
}

impl TriState {
    /// Directive value.
    pub fn as_str(self) -> &'static str {
        match self {
            TriState::Auto => "auto",
            TriState::Yes => "yes",
            TriState::No => "no",
        }
    }

    /// Parses `auto`, `yes` or `no`, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<TriState> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(TriState::Auto),
            "yes" => Some(TriState::Yes),
            "no" => Some(TriState::No),
            _ => None,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::Yes } else { TriState::No }
    }
}

/// Where the installer's own icon comes from.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerIcon {
    /// Use the icon bundled with this tool, materialized at build time.
    #[default]
    Default,
    /// Absolute path of a user-supplied `.ico`, checked to exist.
    Custom(PathBuf),
}

impl InstallerIcon {
    /// Returns the configured path, or `None` for the bundled icon.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InstallerIcon::Default => None,
            InstallerIcon::Custom(path) => Some(path),
        }
    }
}
