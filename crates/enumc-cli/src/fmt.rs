//! clang-format integration for emitted C

use crate::{CliError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Run `text` through clang-format when it can be found on PATH.
///
/// The printer already emits indented code, so a missing clang-format is not
/// an error: the input is returned unchanged with a warning.
pub fn clang_format(text: &str) -> Result<String> {
    let Ok(path) = which::which("clang-format") else {
        warn!("clang-format not found on PATH; keeping printer output");
        return Ok(text.to_string());
    };

    debug!("Formatting with {}", path.display());
    let mut child = Command::new(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(CliError::Format(format!(
            "clang-format failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
