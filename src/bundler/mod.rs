//! Configuration resolution and installer script generation.
//!
//! # Overview
//!
//! 1. [`ConfigBuilder`] reads a [`Manifest`](crate::metadata::Manifest),
//!    applies per-field precedence and validates everything, producing an
//!    immutable [`ResolvedConfig`]
//! 2. [`ScriptBuilder`] renders that configuration plus the built app
//!    directory into an Inno Setup script, staging the files it references
//!
//! # Example
//!
//! ```no_run
//! use inno_bundle::bundler::{ConfigBuilder, Overrides, ScriptBuilder};
//! use inno_bundle::metadata::load_manifest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = load_manifest(std::path::Path::new("."))?;
//! let config = ConfigBuilder::new(&manifest)
//!     .overrides(Overrides::default())
//!     .build()?;
//! let script = ScriptBuilder::new(&config, "build/windows/x64/runner/Release").build()?;
//! println!("{}", script.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod inno;
pub mod settings;
pub mod utils;

pub use error::{ConfigError, Error, ErrorExt, Result};
pub use inno::ScriptBuilder;
pub use settings::{
    BuildMode, ConfigBuilder, InstallerIcon, Language, Overrides, ResolvedConfig, TriState,
    resolve,
};
