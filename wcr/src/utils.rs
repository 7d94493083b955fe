// src/utils.rs
use anyhow::{Context as _, Result, anyhow};
use std::io::{self, BufRead as _, Write as _};
use std::path::PathBuf;

/// Prints `message` to standard output and reads one line from standard
/// input, trimmed of surrounding whitespace. The prompt is written without a
/// trailing newline so the response appears on the same line.
///
/// # Errors
///
/// This function may return an error if:
/// * The prompt cannot be written to standard output
/// * Standard input closes before a line is supplied
pub fn prompt_path(message: &str) -> Result<PathBuf> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if bytes_read == 0 {
        return Err(anyhow!("Standard input closed before a path was supplied"));
    }

    Ok(PathBuf::from(line.trim()))
}
