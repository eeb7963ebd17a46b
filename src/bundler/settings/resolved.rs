//! The resolved, validated installer configuration.

use super::{BuildMode, InstallerIcon, Language, TriState};
use crate::bundler::utils::text::camel_case;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fully validated configuration for one bundling run.
///
/// Only [`ConfigBuilder`](super::ConfigBuilder) constructs this value, and it
/// does so only after every field has passed validation. It is never mutated
/// afterwards.
///
/// # Examples
///
/// ```no_run
/// use inno_bundle::bundler::{ConfigBuilder, Overrides};
/// use inno_bundle::metadata::Manifest;
///
/// # fn example() -> inno_bundle::bundler::Result<()> {
/// let manifest = Manifest::from_yaml_str(
///     "name: demo\nversion: 1.0.0\ndescription: Demo\nmaintainer: Me\n\
///      inno_bundle:\n  id: 0b4a2f6e-3c1f-4d7a-9f0e-2b1c3d4e5f60\n",
/// )
/// .expect("valid yaml");
/// let config = ConfigBuilder::new(&manifest)
///     .overrides(Overrides::default())
///     .build()?;
/// assert_eq!(config.display_name(), "Demo");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub(super) id: String,
    pub(super) manifest_name: String,
    pub(super) display_name: String,
    pub(super) description: String,
    pub(super) version: String,
    pub(super) publisher: String,
    pub(super) url: String,
    pub(super) support_url: String,
    pub(super) updates_url: String,
    pub(super) installer_icon: InstallerIcon,
    pub(super) license_file: Option<PathBuf>,
    pub(super) languages: Vec<Language>,
    pub(super) admin: bool,
    pub(super) disable_welcome_page: bool,
    pub(super) disable_ready_page: bool,
    pub(super) disable_finished_page: bool,
    pub(super) disable_ready_memo: bool,
    pub(super) disable_dir_page: TriState,
    pub(super) disable_program_group_page: TriState,
    pub(super) vc_redist: bool,
    pub(super) build_mode: BuildMode,
    pub(super) build_app: bool,
    pub(super) build_installer: bool,
}

impl ResolvedConfig {
    /// Application id (a UUID), stable across upgrades.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `name` from pubspec.yaml; the base name of the built executable.
    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Name shown to users and used for the installed executable.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Camel-cased display name, used in the installer file name.
    pub fn camel_case_name(&self) -> String {
        camel_case(&self.display_name)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Publisher URL; empty when none was configured.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn support_url(&self) -> &str {
        &self.support_url
    }

    pub fn updates_url(&self) -> &str {
        &self.updates_url
    }

    pub fn installer_icon(&self) -> &InstallerIcon {
        &self.installer_icon
    }

    /// Absolute path of the license shown by the wizard, if any.
    pub fn license_file(&self) -> Option<&Path> {
        self.license_file.as_deref()
    }

    /// Selected languages; the first one is the installer's default.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Whether to install machine-wide (true) or per-user (false).
    pub fn admin(&self) -> bool {
        self.admin
    }

    pub fn disable_welcome_page(&self) -> bool {
        self.disable_welcome_page
    }

    pub fn disable_ready_page(&self) -> bool {
        self.disable_ready_page
    }

    pub fn disable_finished_page(&self) -> bool {
        self.disable_finished_page
    }

    pub fn disable_ready_memo(&self) -> bool {
        self.disable_ready_memo
    }

    pub fn disable_dir_page(&self) -> TriState {
        self.disable_dir_page
    }

    pub fn disable_program_group_page(&self) -> TriState {
        self.disable_program_group_page
    }

    /// Whether to ship the MSVC runtime DLLs found on the host.
    pub fn vc_redist(&self) -> bool {
        self.vc_redist
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Whether the orchestration layer should build the app first.
    pub fn build_app(&self) -> bool {
        self.build_app
    }

    /// Whether the orchestration layer should compile the installer.
    pub fn build_installer(&self) -> bool {
        self.build_installer
    }

    /// File name of the executable produced by `flutter build`.
    pub fn source_exe_name(&self) -> String {
        format!("{}.exe", self.manifest_name)
    }

    /// File name the executable is installed under.
    pub fn target_exe_name(&self) -> String {
        format!("{}.exe", self.display_name)
    }

    /// Installer base file name, without extension.
    pub fn installer_name(&self) -> String {
        format!("{}-x86_64-{}-Installer", self.camel_case_name(), self.version)
    }
}
