//! enumc CLI binary
//!
//! Command-line interface for converting Rust enum declarations into C
//! tagged unions.
//!
//! # Usage
//!
//! ```bash
//! # Convert a Rust source file and print the C declarations
//! enumc convert types.rs
//!
//! # Convert into a file, formatted with clang-format when available
//! enumc convert types.rs --outfile types.h --format
//!
//! # Dump the extracted enum representation
//! enumc parse types.rs --json
//!
//! # Validate that files only contain convertible enums
//! enumc check src/types.rs src/wire.rs
//! ```

use clap::{Parser, Subcommand};
use enumc_cli::{
    cli::CliConfig,
    commands::{self, check::CheckArgs, convert::ConvertArgs, parse::ParseArgs},
    Result,
};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "enumc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert Rust enums to C tagged unions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Rust enum declarations to C tagged unions
    Convert(ConvertArgs),

    /// Parse and display the extracted enum representation
    Parse(ParseArgs),

    /// Check that input files only contain convertible enums
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Convert(args) => commands::convert_command(args, &config),
        Commands::Parse(args) => commands::parse_command(args, &config),
        Commands::Check(args) => commands::check_command(args, &config),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Keep stdout clean for piped C output
    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}
