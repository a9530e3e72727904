//! Where command input comes from: an argument, a file, or stdin.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::CliError;

/// Returns the single value to convert.
///
/// Uses `arg` when given, otherwise reads stdin. Surrounding whitespace is
/// trimmed so piped input with a trailing newline works.
pub fn value(arg: Option<String>) -> Result<String, CliError> {
    let raw = match arg {
        Some(arg) => {
            debug!(source = "argument", "reading input");
            arg
        }
        None => {
            debug!(source = "stdin", "reading input");
            read_stdin()?
        }
    };
    normalize(&raw)
}

/// Returns the text to scan: the file at `path`, or stdin.
pub fn text(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            debug!(source = %path.display(), "reading input");
            std::fs::read_to_string(path).map_err(|e| CliError::read(path.display().to_string(), e))
        }
        None => {
            debug!(source = "stdin", "reading input");
            read_stdin()
        }
    }
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| CliError::read("stdin", e))?;
    Ok(buf)
}

fn normalize(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(trimmed.to_string())
}
