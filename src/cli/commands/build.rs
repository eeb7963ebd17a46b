//! `inno_bundle build`: resolve, build the app, generate and compile.

use crate::bundler::{BuildMode, ConfigBuilder, inno};
use crate::cli::BuildArgs;
use crate::error::Result;
use crate::metadata;
use anyhow::Context;
use path_absolutize::Absolutize;
use std::{path::Path, process::Command};

/// Runs the build pipeline for one project.
pub fn execute(args: &BuildArgs) -> Result<i32> {
    let project = args.project.absolutize()?.into_owned();

    let manifest = metadata::load_manifest(&project)?;
    let config = ConfigBuilder::new(&manifest)
        .work_dir(&project)
        .overrides(args.overrides())
        .build()?;

    if args.envs {
        print!("{}", config.to_env_string());
        return Ok(0);
    }
    if args.json {
        println!("{}", config.to_json()?);
        return Ok(0);
    }

    if config.build_app() {
        build_app(&project, config.build_mode())?;
    } else {
        log::info!("Skipping app build");
    }

    let app_dir = inno::app_build_dir(&project, config.build_mode());
    let script = inno::bundle_project(&config, &project, &app_dir)?;
    println!("{}", script.display());

    Ok(0)
}

/// Runs `flutter build windows --<mode>` in the project directory.
fn build_app(project: &Path, mode: BuildMode) -> anyhow::Result<()> {
    let flutter = which::which("flutter").context("flutter not found in PATH")?;
    log::info!("Building app with flutter ({} mode)...", mode.name());

    let status = Command::new(&flutter)
        .args(["build", "windows", &format!("--{}", mode.name())])
        .current_dir(project)
        .status()
        .with_context(|| format!("running {} build windows", flutter.display()))?;

    if !status.success() {
        anyhow::bail!("flutter build windows failed with exit code: {:?}", status.code());
    }
    Ok(())
}
