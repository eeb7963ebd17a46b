//! Inno Setup script generation.
//!
//! Renders the seven sections in their fixed order behind a constant
//! preamble, stages the files the script references, and writes the result
//! with a UTF-8 BOM.

use super::{sections, template::PREAMBLE, utils};
use crate::bundler::{
    error::{ErrorExt, Result},
    settings::{InstallerIcon, ResolvedConfig},
    utils::fs,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Icon used when the manifest names none.
const DEFAULT_ICON: &[u8] = include_bytes!("../../../assets/installer.ico");

/// Generates the installer script for one resolved configuration.
///
/// # Examples
///
/// ```no_run
/// use inno_bundle::bundler::{ResolvedConfig, ScriptBuilder};
///
/// # fn example(config: &ResolvedConfig) -> inno_bundle::bundler::Result<()> {
/// let script = ScriptBuilder::new(config, "build/windows/x64/runner/Release").build()?;
/// println!("Script written to {}", script.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScriptBuilder<'a> {
    config: &'a ResolvedConfig,
    app_dir: PathBuf,
    work_dir: Option<PathBuf>,
    system_dir: Option<PathBuf>,
    staging_dir: Option<PathBuf>,
}

/// Absolute paths used during one generation run.
#[derive(Debug)]
struct Layout {
    app_dir: PathBuf,
    output_dir: PathBuf,
    staging_dir: PathBuf,
    system_dir: PathBuf,
}

impl<'a> ScriptBuilder<'a> {
    /// Creates a builder for `config` over the built app in `app_dir`.
    pub fn new<P: AsRef<Path>>(config: &'a ResolvedConfig, app_dir: P) -> Self {
        Self {
            config,
            app_dir: app_dir.as_ref().to_path_buf(),
            work_dir: None,
            system_dir: None,
            staging_dir: None,
        }
    }

    /// Sets the project root the output directory is placed under.
    ///
    /// Default: the process working directory
    pub fn work_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory searched for runtime DLLs.
    ///
    /// Default: `%SystemRoot%\System32`
    pub fn system_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.system_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets where the default icon and runtime DLLs are staged.
    ///
    /// Default: `<temp>/inno_bundle/<app id>`
    pub fn staging_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Renders the full script text, staging referenced files on the way.
    pub fn render(&self) -> Result<String> {
        let layout = self.layout()?;
        self.render_with(&layout)
    }

    /// Renders the script and writes it, returning its path.
    pub fn build(self) -> Result<PathBuf> {
        let layout = self.layout()?;
        log::info!(
            "Generating installer script for {} {}",
            self.config.display_name(),
            self.config.version()
        );

        let script = self.render_with(&layout)?;

        let script_path = layout.output_dir.join(utils::SCRIPT_FILE);
        utils::write_utf8_bom(&script_path, &script)?;

        log::info!("✓ Created installer script: {}", script_path.display());
        Ok(script_path)
    }

    fn render_with(&self, layout: &Layout) -> Result<String> {
        if !layout.app_dir.is_dir() {
            return Err::<String, _>(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "app build directory does not exist",
            ))
            .fs_context("reading app build directory", &layout.app_dir);
        }

        let icon = self.installer_icon(&layout.staging_dir)?;

        let sections = [
            sections::setup(self.config, &layout.output_dir, &icon)?,
            sections::install_delete(),
            sections::languages(self.config),
            sections::tasks(),
            sections::files(
                self.config,
                &layout.app_dir,
                &layout.staging_dir,
                &layout.system_dir,
            )?,
            sections::icons(self.config),
            sections::run(self.config),
        ];

        Ok(format!("{PREAMBLE}{}", sections.join("\n")))
    }

    /// Returns the icon path to emit, writing the bundled icon if needed.
    fn installer_icon(&self, staging_dir: &Path) -> Result<PathBuf> {
        match self.config.installer_icon() {
            InstallerIcon::Custom(path) => Ok(path.clone()),
            InstallerIcon::Default => {
                let path = staging_dir.join("installer.ico");
                fs::write_file(&path, DEFAULT_ICON)?;
                log::debug!("Materialized default installer icon at {}", path.display());
                Ok(path)
            }
        }
    }

    fn layout(&self) -> Result<Layout> {
        let work_dir = match &self.work_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().fs_context("reading working directory", ".")?,
        };
        let work_dir = absolute(&work_dir)?;

        let staging_dir = match &self.staging_dir {
            Some(dir) => absolute(dir)?,
            None => utils::default_staging_dir(self.config.id()),
        };

        Ok(Layout {
            app_dir: absolute(&work_dir.join(&self.app_dir))?,
            output_dir: utils::output_dir(&work_dir, self.config.build_mode()),
            staging_dir,
            system_dir: self.system_dir.clone().unwrap_or_else(utils::system_dir),
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving path", path)?
        .into_owned())
}
