//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap.

use crate::bundler::{BuildMode, Overrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inno Setup installer bundler for Flutter Windows apps
#[derive(Parser, Debug)]
#[command(
    name = "inno_bundle",
    version,
    about = "Inno Setup installer bundler for Flutter Windows apps",
    long_about = "Builds a Flutter Windows app, generates an Inno Setup script from the \
inno_bundle section of pubspec.yaml, and compiles it into an installer.

Usage:
  inno_bundle id
  inno_bundle id --ns \"www.example.com\"
  inno_bundle build --release
  inno_bundle build --no-app --no-installer
  inno_bundle build --envs"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the app and its installer
    Build(BuildArgs),

    /// Generate an app id for inno_bundle.id
    Id(IdArgs),
}

/// Arguments of `inno_bundle build`
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Build in release mode (default)
    #[arg(long)]
    pub release: bool,

    /// Build in profile mode
    #[arg(long)]
    pub profile: bool,

    /// Build in debug mode
    #[arg(long)]
    pub debug: bool,

    /// Version to use instead of the one in pubspec.yaml
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Skip `flutter build windows`; use the existing build output
    #[arg(long)]
    pub no_app: bool,

    /// Generate the script only; do not run ISCC
    #[arg(long)]
    pub no_installer: bool,

    /// Print the resolved configuration as KEY=value lines and exit
    #[arg(long)]
    pub envs: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Flutter project directory containing pubspec.yaml
    #[arg(short = 'p', long, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,
}

/// Arguments of `inno_bundle id`
#[derive(clap::Args, Debug)]
pub struct IdArgs {
    /// Derive a stable id from this namespace string instead of a random one
    #[arg(long, value_name = "NAMESPACE")]
    pub ns: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Build(build) => {
                let modes = [build.release, build.profile, build.debug];
                if modes.iter().filter(|&&set| set).count() > 1 {
                    return Err(
                        "only one of --release, --profile or --debug may be given".to_string()
                    );
                }
                if build.envs && build.json {
                    return Err("--envs and --json are mutually exclusive".to_string());
                }
                if build
                    .app_version
                    .as_deref()
                    .is_some_and(|v| v.trim().is_empty())
                {
                    return Err("--app-version cannot be empty".to_string());
                }
                Ok(())
            }
            Command::Id(id) => {
                if id.ns.as_deref().is_some_and(|ns| ns.trim().is_empty()) {
                    return Err("--ns cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

impl BuildArgs {
    /// Selected build mode; release when no flag is given.
    pub fn build_mode(&self) -> BuildMode {
        if self.debug {
            BuildMode::Debug
        } else if self.profile {
            BuildMode::Profile
        } else {
            BuildMode::Release
        }
    }

    /// Caller overrides for the resolver.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            app_version: self.app_version.clone(),
            build_mode: self.build_mode(),
            build_app: !self.no_app,
            build_installer: !self.no_installer,
        }
    }
}
