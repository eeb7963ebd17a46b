//! Resolver turning a raw manifest into a [`ResolvedConfig`].

use super::{BuildMode, InstallerIcon, Language, ResolvedConfig, TriState};
use crate::bundler::{
    error::{ConfigError, ErrorExt, Result},
    utils::text::camel_case,
};
use crate::metadata::{Manifest, TOOL_SECTION};
use path_absolutize::Absolutize;
use regex::Regex;
use serde_yaml::Value;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Characters allowed in a display name; it becomes a file name on disk.
static DISPLAY_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-.& ]+$").expect("display name pattern is valid"));

/// Values pinned by the invoking pipeline rather than the manifest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Overrides {
    /// Version to use instead of any manifest version.
    pub app_version: Option<String>,
    pub build_mode: BuildMode,
    pub build_app: bool,
    pub build_installer: bool,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            app_version: None,
            build_mode: BuildMode::Release,
            build_app: true,
            build_installer: true,
        }
    }
}

/// One candidate source for a string field, in precedence order.
enum Source<'a> {
    /// Caller-supplied value
    Override(Option<&'a str>),
    /// Manifest value with its field path for error messages
    Field(&'static str, Option<&'a Value>),
}

/// Returns the first candidate holding a non-empty string.
///
/// A candidate holding a non-string value fails instead of being skipped.
fn first_of<'a, const N: usize>(
    sources: [Source<'a>; N],
) -> std::result::Result<Option<&'a str>, ConfigError> {
    for source in sources {
        let found = match source {
            Source::Override(value) => value,
            Source::Field(field, value) => string_field(field, value)?,
        };
        if let Some(value) = found.filter(|v| !v.trim().is_empty()) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn string_field<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> std::result::Result<Option<&'a str>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ConfigError::InvalidType {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

fn bool_field(
    field: &'static str,
    value: Option<&Value>,
) -> std::result::Result<Option<bool>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ConfigError::InvalidType {
            field: field.to_string(),
            expected: "a boolean",
        }),
    }
}

fn tri_state_field(
    field: &'static str,
    value: Option<&Value>,
) -> std::result::Result<TriState, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(TriState::Auto),
        Some(Value::Bool(b)) => Ok(TriState::from(*b)),
        Some(Value::String(s)) => TriState::parse(s).ok_or_else(|| ConfigError::InvalidTriState {
            field: field.to_string(),
            value: s.clone(),
        }),
        Some(_) => Err(ConfigError::InvalidType {
            field: field.to_string(),
            expected: "one of `auto`, `yes` or `no`",
        }),
    }
}

/// Builder resolving a [`ResolvedConfig`] from a manifest.
///
/// Each field is resolved independently through its own ordered list of
/// sources: caller override, then `inno_bundle:` section, then the generic
/// pubspec field, then a default. Nothing is returned unless every field
/// passes validation.
///
/// # Examples
///
/// ```no_run
/// use inno_bundle::bundler::{BuildMode, ConfigBuilder, Overrides};
/// use inno_bundle::metadata::load_manifest;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest = load_manifest(std::path::Path::new("."))?;
/// let config = ConfigBuilder::new(&manifest)
///     .work_dir(".")
///     .overrides(Overrides {
///         app_version: Some("2.0.0".into()),
///         build_mode: BuildMode::Release,
///         ..Default::default()
///     })
///     .build()?;
/// println!("{}", config.installer_name());
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder<'a> {
    manifest: &'a Manifest,
    work_dir: Option<PathBuf>,
    overrides: Overrides,
}

impl<'a> ConfigBuilder<'a> {
    /// Creates a builder over a parsed manifest.
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            work_dir: None,
            overrides: Overrides::default(),
        }
    }

    /// Sets the project root used to resolve relative paths.
    ///
    /// Default: the process working directory
    pub fn work_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets caller overrides.
    ///
    /// Default: [`Overrides::default()`]
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves and validates every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] (wrapped in [`crate::bundler::Error`]) for the
    /// first field that fails validation, or a filesystem error if the working
    /// directory cannot be determined.
    pub fn build(self) -> Result<ResolvedConfig> {
        let work_dir = match self.work_dir {
            Some(dir) => dir,
            None => std::env::current_dir().fs_context("reading working directory", ".")?,
        };
        let work_dir = work_dir
            .absolutize()
            .fs_context("resolving working directory", &work_dir)?
            .into_owned();

        let m = self.manifest;
        let overrides = self.overrides;

        if m
            .tool_section()
            .is_some_and(|section| !section.is_mapping() && !section.is_null())
        {
            return Err(ConfigError::InvalidType {
                field: TOOL_SECTION.to_string(),
                expected: "a mapping",
            }
            .into());
        }

        let id = resolve_id(m)?;

        let manifest_name = first_of([Source::Field("name", m.field("name"))])?
            .ok_or(ConfigError::MissingField("name"))?
            .to_string();

        let display_name = match first_of([Source::Field("inno_bundle.name", m.tool_field("name"))])? {
            Some(name) if DISPLAY_NAME_PATTERN.is_match(name) => name.to_string(),
            Some(name) => return Err(ConfigError::InvalidDisplayName(name.to_string()).into()),
            None => camel_case(&manifest_name),
        };

        let description = first_of([
            Source::Field("inno_bundle.description", m.tool_field("description")),
            Source::Field("description", m.field("description")),
        ])?
        .ok_or(ConfigError::MissingField("description"))?
        .to_string();

        let version = first_of([
            Source::Override(overrides.app_version.as_deref()),
            Source::Field("inno_bundle.version", m.tool_field("version")),
            Source::Field("version", m.field("version")),
        ])?
        .ok_or(ConfigError::MissingField("version"))?
        .to_string();

        let publisher = first_of([
            Source::Field("inno_bundle.publisher", m.tool_field("publisher")),
            Source::Field("inno_bundle.maintainer", m.tool_field("maintainer")),
            Source::Field("publisher", m.field("publisher")),
            Source::Field("maintainer", m.field("maintainer")),
        ])?
        .ok_or(ConfigError::MissingField("publisher"))?
        .to_string();

        let url = first_of([
            Source::Field("inno_bundle.url", m.tool_field("url")),
            Source::Field("homepage", m.field("homepage")),
        ])?
        .unwrap_or_default()
        .to_string();

        let support_url = first_of([
            Source::Field("inno_bundle.support_url", m.tool_field("support_url")),
            Source::Override(Some(url.as_str())),
        ])?
        .unwrap_or_default()
        .to_string();

        let updates_url = first_of([
            Source::Field("inno_bundle.updates_url", m.tool_field("updates_url")),
            Source::Override(Some(url.as_str())),
        ])?
        .unwrap_or_default()
        .to_string();

        let installer_icon = match first_of([Source::Field(
            "inno_bundle.installer_icon",
            m.tool_field("installer_icon"),
        )])? {
            Some(icon) => {
                InstallerIcon::Custom(existing_file(&work_dir, icon, ConfigError::IconNotFound)?)
            }
            None => InstallerIcon::Default,
        };

        let license_file = first_of([Source::Field(
            "inno_bundle.license_file",
            m.tool_field("license_file"),
        )])?
        .map(|license| existing_file(&work_dir, license, ConfigError::LicenseNotFound))
        .transpose()?;

        let languages = resolve_languages(m.tool_field("languages"))?;

        // The top-level `admin` key is type-checked too, although the value
        // normally comes from the inno_bundle section.
        let top_level_admin = bool_field("admin", m.field("admin"))?;
        let admin = bool_field("inno_bundle.admin", m.tool_field("admin"))?
            .or(top_level_admin)
            .unwrap_or(true);

        let config = ResolvedConfig {
            id,
            manifest_name,
            display_name,
            description,
            version,
            publisher,
            url,
            support_url,
            updates_url,
            installer_icon,
            license_file,
            languages,
            admin,
            disable_welcome_page: bool_field(
                "inno_bundle.disable_welcome_page",
                m.tool_field("disable_welcome_page"),
            )?
            .unwrap_or(true),
            disable_ready_page: bool_field(
                "inno_bundle.disable_ready_page",
                m.tool_field("disable_ready_page"),
            )?
            .unwrap_or(false),
            disable_finished_page: bool_field(
                "inno_bundle.disable_finished_page",
                m.tool_field("disable_finished_page"),
            )?
            .unwrap_or(false),
            disable_ready_memo: bool_field(
                "inno_bundle.disable_ready_memo",
                m.tool_field("disable_ready_memo"),
            )?
            .unwrap_or(false),
            disable_dir_page: tri_state_field(
                "inno_bundle.disable_dir_page",
                m.tool_field("disable_dir_page"),
            )?,
            disable_program_group_page: tri_state_field(
                "inno_bundle.disable_program_group_page",
                m.tool_field("disable_program_group_page"),
            )?,
            vc_redist: bool_field("inno_bundle.vc_redist", m.tool_field("vc_redist"))?
                .unwrap_or(true),
            build_mode: overrides.build_mode,
            build_app: overrides.build_app,
            build_installer: overrides.build_installer,
        };

        log::debug!(
            "Resolved {} {} ({} language(s), admin: {})",
            config.display_name,
            config.version,
            config.languages.len(),
            config.admin
        );

        Ok(config)
    }
}

fn resolve_id(m: &Manifest) -> std::result::Result<String, ConfigError> {
    let raw = first_of([Source::Field("inno_bundle.id", m.tool_field("id"))])?
        .ok_or(ConfigError::MissingId)?;
    let id = uuid::Uuid::parse_str(raw.trim())
        .map_err(|_| ConfigError::InvalidId(raw.to_string()))?;
    Ok(id.hyphenated().to_string())
}

fn resolve_languages(value: Option<&Value>) -> std::result::Result<Vec<Language>, ConfigError> {
    let entries = match value {
        None | Some(Value::Null) => return Ok(Language::ALL.to_vec()),
        Some(Value::Sequence(entries)) => entries,
        Some(_) => {
            return Err(ConfigError::InvalidType {
                field: "inno_bundle.languages".to_string(),
                expected: "a list of language names",
            });
        }
    };

    let mut languages = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.as_str().ok_or_else(|| ConfigError::InvalidType {
            field: "inno_bundle.languages".to_string(),
            expected: "a list of language names",
        })?;
        let language =
            Language::from_name(name).ok_or_else(|| ConfigError::UnknownLanguage(name.to_string()))?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }

    if languages.is_empty() {
        return Err(ConfigError::EmptyLanguages);
    }
    Ok(languages)
}

/// Resolves `relative` against `work_dir`, requiring an existing file.
fn existing_file(
    work_dir: &Path,
    relative: &str,
    not_found: fn(PathBuf) -> ConfigError,
) -> std::result::Result<PathBuf, ConfigError> {
    let joined = work_dir.join(relative);
    let path = match joined.absolutize() {
        Ok(path) => path.into_owned(),
        Err(_) => return Err(not_found(joined)),
    };
    if path.is_file() {
        Ok(path)
    } else {
        Err(not_found(path))
    }
}
