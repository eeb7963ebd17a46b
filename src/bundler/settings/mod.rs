//! Configuration resolution.
//!
//! Turns a raw pubspec.yaml into an immutable, validated
//! [`ResolvedConfig`] through [`ConfigBuilder`], applying per-field
//! precedence: caller override, `inno_bundle:` section, generic pubspec
//! field, default.

mod builder;
mod resolved;
mod env;
mod language;
mod mode;

pub use builder::{ConfigBuilder, Overrides};
pub use resolved::ResolvedConfig;
pub use language::Language;
pub use mode::{BuildMode, InstallerIcon, TriState};

use crate::bundler::error::Result;
use crate::metadata::Manifest;

/// Resolves a manifest in the process working directory.
///
/// Shorthand for [`ConfigBuilder`] with only overrides set.
pub fn resolve(manifest: &Manifest, overrides: Overrides) -> Result<ResolvedConfig> {
    ConfigBuilder::new(manifest).overrides(overrides).build()
}
