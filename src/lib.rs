//! Inno Setup installer bundler for Flutter Windows applications.
//!
//! This library turns a project's pubspec.yaml into a validated
//! configuration and renders it, together with the built app directory,
//! into an Inno Setup script ready for the ISCC compiler.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundleError, CliError, Result};
