//! Enum conversion command implementation

use crate::{cli::CliConfig, fmt, Result};
use clap::Args;
use console::style;
use enumc_core::{lower_enum, CPrinter, PrinterConfig};
use enumc_rust::RustFrontend;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the convert command
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// A Rust source file containing enum declarations
    pub infile: PathBuf,

    /// Path of the C file to write (stdout when omitted)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Run the emitted C through clang-format when available
    #[arg(short, long)]
    pub format: bool,
}

/// Execute the convert command
pub fn convert_command(args: ConvertArgs, config: &CliConfig) -> Result<()> {
    let frontend = RustFrontend::new();
    let enums = frontend.extract_file(&args.infile)?;

    if enums.is_empty() {
        println!(
            "{} No enum declarations found in {}",
            style("ℹ").blue(),
            args.infile.display()
        );
        return Ok(());
    }

    info!(
        "Converting {} enum(s) from {}",
        enums.len(),
        args.infile.display()
    );

    let decls: Vec<_> = enums.iter().map(lower_enum).collect();
    let printer = CPrinter::with_config(PrinterConfig {
        indent_width: config.formatting.indent_size,
    });
    let mut output = printer.print_file(&decls);

    if args.format || config.formatting.clang_format {
        output = fmt::clang_format(&output)?;
    }

    match &args.outfile {
        Some(path) => {
            fs::write(path, &output)?;
            println!("{} Wrote {}", style("✔").green(), path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}
