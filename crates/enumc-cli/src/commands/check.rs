//! Input validation command implementation

use crate::{cli::CliConfig, CliError, Result};
use clap::Args;
use console::style;
use enumc_rust::RustFrontend;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Rust source files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the check command
pub fn check_command(args: CheckArgs, _config: &CliConfig) -> Result<()> {
    println!(
        "{} Checking {} file(s)...",
        style("🔍").cyan(),
        args.files.len()
    );

    let frontend = RustFrontend::new();
    let mut failures = 0usize;
    for path in &args.files {
        match frontend.extract_file(path) {
            Ok(enums) => {
                println!(
                    "{} {}: {} convertible enum(s)",
                    style("✔").green(),
                    path.display(),
                    enums.len()
                );
            }
            Err(err) => {
                failures += 1;
                println!("{} {}: {}", style("✘").red(), path.display(), err);
            }
        }
    }

    if failures > 0 {
        return Err(CliError::InvalidInput(format!(
            "{failures} file(s) failed validation"
        )));
    }
    Ok(())
}
