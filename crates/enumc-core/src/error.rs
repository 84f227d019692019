//! Error types for enumc-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse Rust source: {0}")]
    Parse(String),

    #[error("Unsupported construct in enum {enum_name}: {detail}")]
    Unsupported { enum_name: String, detail: String },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn unsupported(enum_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Unsupported {
            enum_name: enum_name.into(),
            detail: detail.into(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Other(err.to_string())
    }
}
