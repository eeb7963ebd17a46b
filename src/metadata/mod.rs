//! Manifest loading from a project's pubspec.yaml

use crate::error::{BundleError, CliError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Key of the tool-specific section inside pubspec.yaml
pub const TOOL_SECTION: &str = "inno_bundle";

/// File name of the project manifest
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// Raw, unvalidated pubspec.yaml contents.
///
/// Fields are looked up on demand by the resolver; nothing here is checked
/// beyond the document being well-formed YAML.
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// Parses manifest text.
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self { root })
    }

    /// Wraps an already-parsed document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Top-level field, e.g. `version`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The `inno_bundle:` section, if present.
    pub fn tool_section(&self) -> Option<&Value> {
        self.root.get(TOOL_SECTION)
    }

    /// Field inside the `inno_bundle:` section.
    pub fn tool_field(&self, key: &str) -> Option<&Value> {
        self.tool_section().and_then(|section| section.get(key))
    }
}

/// Load the manifest from a project directory (single read + parse)
pub fn load_manifest(project_dir: &Path) -> Result<Manifest> {
    let path = project_dir.join(MANIFEST_FILE);
    log::debug!("Reading manifest from {}", path.display());

    let text = std::fs::read_to_string(&path).map_err(|e| {
        BundleError::Cli(CliError::ExecutionFailed {
            command: "read_pubspec".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let manifest = Manifest::from_yaml_str(&text)?;

    if !manifest.root.is_mapping() {
        return Err(BundleError::Cli(CliError::InvalidArguments {
            reason: format!("{} is not a YAML mapping", path.display()),
        }));
    }

    Ok(manifest)
}
