//! inno_bundle - Inno Setup installers for Flutter Windows apps.
//!
//! Builds the app, generates the installer script from pubspec.yaml and
//! compiles it with ISCC.

use inno_bundle::cli;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_config_error() {
                eprintln!("Fix the inno_bundle section of pubspec.yaml and try again.");
            }
            1
        }
    };

    process::exit(exit_code);
}
