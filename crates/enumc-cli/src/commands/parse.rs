//! Parse and display the extracted enum representation

use crate::{cli::CliConfig, Result};
use clap::Args;
use enumc_rust::RustFrontend;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Rust source files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit the extracted representation as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the parse command
pub fn parse_command(args: ParseArgs, _config: &CliConfig) -> Result<()> {
    let frontend = RustFrontend::new();
    for path in &args.files {
        let enums = frontend.extract_file(path)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&enums)?);
        } else {
            println!("File {}:", path.display());
            for def in &enums {
                println!("{def:#?}");
            }
        }
    }
    Ok(())
}
