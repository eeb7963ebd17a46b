//! Top-level error types for the command line tool.
//!
//! Core failures from [`crate::bundler`] are wrapped here together with the
//! errors of the surrounding orchestration (manifest I/O, external tools).

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Resolution or script generation errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// External process errors
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundleError {
    /// Whether the error came from manifest validation.
    ///
    /// Those are fixed by editing pubspec.yaml rather than the environment.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BundleError::Bundler(crate::bundler::Error::Config(_)) | BundleError::Yaml(_)
        )
    }
}
