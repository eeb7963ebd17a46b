//! Error types for configuration resolution and script generation.
//!
//! Two kinds of failure exist: [`ConfigError`] for any manifest field that
//! fails validation, and filesystem failures ([`Error::Fs`]) raised while
//! staging files or writing the script. Neither is retried.

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the resolver and the script builder.
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest validation failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Filesystem operation failed
    #[error("error {context} `{}`: {source}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Template registration or rendering failed
    #[error("template error: {0}")]
    Template(String),

    /// External command could not be started
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Program name
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Validation failures found while resolving the manifest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `inno_bundle.id` is absent
    #[error(
        "inno_bundle.id is missing from pubspec.yaml; generate one with `inno_bundle id` \
         (or `inno_bundle id --ns \"www.example.com\"` for a namespaced id)"
    )]
    MissingId,

    /// `inno_bundle.id` is not a UUID
    #[error("inno_bundle.id `{0}` is not a valid UUID")]
    InvalidId(String),

    /// A required identity field is absent from every source
    #[error("`{0}` is required but was not found in inno_bundle or pubspec.yaml")]
    MissingField(&'static str),

    /// The display name contains characters not allowed in a filename
    #[error("inno_bundle.name `{0}` may only contain letters, digits, spaces and `_-.&`")]
    InvalidDisplayName(String),

    /// The configured installer icon does not exist
    #[error("inno_bundle.installer_icon not found at `{}`", .0.display())]
    IconNotFound(PathBuf),

    /// The configured license file does not exist
    #[error("inno_bundle.license_file not found at `{}`", .0.display())]
    LicenseNotFound(PathBuf),

    /// A language name has no catalog entry
    #[error("inno_bundle.languages: `{0}` is not a supported language")]
    UnknownLanguage(String),

    /// The language list is present but empty
    #[error("inno_bundle.languages must list at least one language")]
    EmptyLanguages,

    /// A field holds the wrong YAML type
    #[error("`{field}` must be {expected}")]
    InvalidType {
        /// Field path, e.g. `inno_bundle.admin`
        field: String,
        /// Expected type description
        expected: &'static str,
    },

    /// A tri-state field holds an unknown token
    #[error("`{field}` must be one of `auto`, `yes` or `no`, got `{value}`")]
    InvalidTriState {
        /// Field path
        field: String,
        /// Offending value
        value: String,
    },
}

/// Attaches operation and path context to filesystem results.
pub trait ErrorExt<T> {
    /// Converts an `io::Error` into [`Error::Fs`] naming the action and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for io::Result<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
