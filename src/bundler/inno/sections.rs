//! Renderers for the individual script sections.
//!
//! Each function returns one complete section, header line included, ending
//! in a newline. Only [`setup`] and [`files`] touch anything outside their
//! arguments.

use super::{template::SETUP_TEMPLATE, utils};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::ResolvedConfig,
    utils::fs,
};
use handlebars::Handlebars;
use std::{collections::BTreeMap, io, path::Path};

/// `[Setup]`: one directive per configuration field.
///
/// `icon` must already be a concrete file path; the bundled default icon is
/// materialized by the caller.
pub fn setup(config: &ResolvedConfig, output_dir: &Path, icon: &Path) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let target_exe = config.target_exe_name();

    let mut data = BTreeMap::new();
    data.insert("app_id", format!("{{{{{}}}", config.id()));
    data.insert("app_name", utils::escape_value(config.display_name()));
    data.insert("uninstall_icon", format!("{{app}}\\{target_exe}"));
    data.insert("version", config.version().to_string());
    data.insert("description", utils::escape_value(config.description()));
    data.insert("publisher", utils::escape_value(config.publisher()));
    data.insert("url", utils::escape_value(config.url()));
    data.insert("support_url", utils::escape_value(config.support_url()));
    data.insert("updates_url", utils::escape_value(config.updates_url()));
    data.insert("default_dir", format!("{{autopf}}\\{}", config.display_name()));
    data.insert("privileges", utils::map_privileges(config.admin()).to_string());
    data.insert("output_dir", output_dir.display().to_string());
    data.insert("installer_name", config.installer_name());
    data.insert("installer_icon", icon.display().to_string());

    if let Some(license) = config.license_file() {
        data.insert("license_file", license.display().to_string());
    }

    data.insert(
        "disable_welcome_page",
        utils::yes_no(config.disable_welcome_page()).to_string(),
    );
    data.insert("disable_dir_page", config.disable_dir_page().as_str().to_string());
    data.insert(
        "disable_program_group_page",
        config.disable_program_group_page().as_str().to_string(),
    );
    data.insert(
        "disable_ready_memo",
        utils::yes_no(config.disable_ready_memo()).to_string(),
    );
    data.insert(
        "disable_ready_page",
        utils::yes_no(config.disable_ready_page()).to_string(),
    );
    data.insert(
        "disable_finished_page",
        utils::yes_no(config.disable_finished_page()).to_string(),
    );

    handlebars
        .register_template_string("setup", SETUP_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register setup template: {e}")))?;

    handlebars
        .render("setup", &data)
        .map_err(|e| Error::Template(format!("failed to render setup template: {e}")))
}

/// `[InstallDelete]`: wipe the previous install so no stale files survive.
pub fn install_delete() -> String {
    "[InstallDelete]\nType: filesandordirs; Name: \"{app}\\*\"\n".to_string()
}

/// `[Languages]`, in configuration order; the first entry is the default.
pub fn languages(config: &ResolvedConfig) -> String {
    let entries: String = config
        .languages()
        .iter()
        .map(|language| {
            format!(
                "Name: \"{}\"; MessagesFile: \"{}\"\n",
                language.name(),
                language.messages_file()
            )
        })
        .collect();
    format!("[Languages]\n{entries}")
}

/// `[Tasks]`: optional desktop shortcut, unchecked by default.
pub fn tasks() -> String {
    "[Tasks]\nName: \"desktopicon\"; Description: \"{cm:CreateDesktopIcon}\"; \
     GroupDescription: \"{cm:AdditionalIcons}\"; Flags: unchecked\n"
        .to_string()
}

/// `[Files]`: every direct child of `app_dir`, then runtime DLLs.
///
/// The built executable is installed as the display name when the two
/// differ. Runtime DLLs found in `system_dir` are copied into
/// `<staging_dir>/vcruntime` first; missing ones are skipped.
pub fn files(
    config: &ResolvedConfig,
    app_dir: &Path,
    staging_dir: &Path,
    system_dir: &Path,
) -> Result<String> {
    let source_exe = config.source_exe_name();
    let target_exe = config.target_exe_name();
    let rename_exe = source_exe != target_exe;

    let mut section = String::from("[Files]\n");

    let entries = walkdir::WalkDir::new(app_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry
            .map_err(io::Error::from)
            .fs_context("reading app build directory", app_dir)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();

        if path.is_dir() {
            log::debug!("Staging directory {}", path.display());
            section.push_str(&format!(
                "Source: \"{}\\*\"; DestDir: \"{{app}}\\{name}\"; \
                 Flags: ignoreversion recursesubdirs createallsubdirs\n",
                path.display()
            ));
        } else if rename_exe && name == source_exe.as_str() {
            log::debug!("Staging {} as {target_exe}", path.display());
            section.push_str(&format!(
                "Source: \"{}\"; DestDir: \"{{app}}\"; DestName: \"{target_exe}\"; Flags: ignoreversion\n",
                path.display()
            ));
        } else {
            log::debug!("Staging file {}", path.display());
            section.push_str(&plain_entry(path));
        }
    }

    if config.vc_redist() {
        for dll in stage_runtime_dlls(staging_dir, system_dir)? {
            section.push_str(&plain_entry(&dll));
        }
    }

    Ok(section)
}

/// A file installed under its own name into `{app}`.
fn plain_entry(path: &Path) -> String {
    format!(
        "Source: \"{}\"; DestDir: \"{{app}}\"; Flags: ignoreversion\n",
        path.display()
    )
}

/// Copies the runtime DLLs present in `system_dir` into a fresh
/// `<staging_dir>/vcruntime` and returns the copied paths.
fn stage_runtime_dlls(staging_dir: &Path, system_dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let dll_dir = staging_dir.join("vcruntime");
    fs::create_dir_all(&dll_dir, true)?;

    let mut staged = Vec::new();
    for name in utils::RUNTIME_DLLS {
        let source = system_dir.join(name);
        if !source.is_file() {
            log::debug!("Runtime DLL not found, skipping: {}", source.display());
            continue;
        }
        let dest = dll_dir.join(name);
        fs::copy_file(&source, &dest)?;
        log::debug!("Staged runtime DLL {}", dest.display());
        staged.push(dest);
    }

    if staged.is_empty() {
        log::warn!(
            "No MSVC runtime DLLs found in {}; the installed app may need the VC++ redistributable",
            system_dir.display()
        );
    }
    Ok(staged)
}

/// `[Icons]`: start menu entry plus the optional desktop entry.
pub fn icons(config: &ResolvedConfig) -> String {
    let name = config.display_name();
    let exe = config.target_exe_name();
    format!(
        "[Icons]\n\
         Name: \"{{autoprograms}}\\{name}\"; Filename: \"{{app}}\\{exe}\"\n\
         Name: \"{{autodesktop}}\\{name}\"; Filename: \"{{app}}\\{exe}\"; Tasks: desktopicon\n"
    )
}

/// `[Run]`: offer to launch the app when setup finishes.
pub fn run(config: &ResolvedConfig) -> String {
    format!(
        "[Run]\nFilename: \"{{app}}\\{}\"; Description: \"{{cm:LaunchProgram,{}}}\"; \
         Flags: nowait postinstall skipifsilent\n",
        config.target_exe_name(),
        utils::escape_label(config.display_name())
    )
}
