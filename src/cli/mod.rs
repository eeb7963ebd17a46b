//! Command line interface for inno_bundle.
//!
//! Parses arguments, validates them, and dispatches to the commands.

mod args;
pub mod commands;

pub use args::{Args, BuildArgs, Command, IdArgs};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match &args.command {
        Command::Build(build) => commands::build::execute(build),
        Command::Id(id) => commands::id::execute(id),
    }
}
