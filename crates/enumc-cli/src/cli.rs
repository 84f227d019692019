//! CLI configuration and settings management

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration loaded from config files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Formatting settings for the emitted C
    pub formatting: FormattingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Spaces per indentation level
    pub indent_size: usize,

    /// Always run the output through clang-format when available
    pub clang_format: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent_size: 4,
            clang_format: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `config_path` when given, otherwise from
    /// `enumc.toml` in the current directory when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local = Path::new("enumc.toml");
        if local.is_file() {
            return Self::load_from_file(local);
        }

        Ok(Self::default())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
