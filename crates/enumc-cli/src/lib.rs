//! enumc CLI library
//!
//! This crate provides the command-line interface for enumc, a converter
//! from Rust enum declarations to C tagged unions.

pub mod cli;
pub mod commands;
pub mod fmt;

// Re-export core types for convenience
pub use enumc_core::*;
pub use enumc_rust::*;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Conversion error: {0}")]
        Conversion(#[from] enumc_core::Error),

        #[error("Serialization error: {0}")]
        Serialize(#[from] serde_json::Error),

        #[error("Formatting error: {0}")]
        Format(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
