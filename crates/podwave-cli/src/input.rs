//! Input loading for CLI commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads a base64 payload from a file, or from stdin when `input` is `-`.
///
/// Surrounding ASCII whitespace (typically a trailing newline) is removed.
/// Whitespace inside the payload is left alone and will fail decoding.
pub fn read_payload(input: &str) -> Result<String> {
    if input == STDIN_PATH {
        read_payload_from(io::stdin().lock()).context("Failed to read payload from stdin")
    } else {
        let file = fs::File::open(input)
            .with_context(|| format!("Failed to read payload file: {}", input))?;
        read_payload_from(file).with_context(|| format!("Failed to read payload file: {}", input))
    }
}

/// Reads a whole payload from `reader` and trims it.
pub fn read_payload_from(mut reader: impl Read) -> Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(trim_payload(&raw).to_string())
}

/// Strips leading and trailing ASCII whitespace from a payload.
pub fn trim_payload(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Reads a binary file.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
