//! Encode command implementation
//!
//! Wraps a base64 PCM payload from the speech API in a WAV file.

use anyhow::Result;
use colored::Colorize;
use podwave_audio::create_wav_blob;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, WavSummary};
use super::reporting::print_wav_summary;
use crate::input::{read_payload, STDIN_PATH};

/// Run the encode command
///
/// # Arguments
/// * `input` - Path to a file holding base64 PCM, or `-` for stdin
/// * `output` - Path of the WAV file to write
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input, output)
    } else {
        run_human(input, output)
    }
}

/// Run encode with human-readable (colored) output
fn run_human(input: &str, output: &str) -> Result<ExitCode> {
    let label = if input == STDIN_PATH { "<stdin>" } else { input };
    println!("{} {}", "Encoding:".cyan().bold(), label);

    let summary = encode_to_file(input, output).map_err(|e| anyhow::anyhow!(e.message))?;

    println!("{}", "WAV written".green().bold());
    print_wav_summary(&summary);

    Ok(ExitCode::SUCCESS)
}

/// Run encode with machine-readable JSON output
fn run_json(input: &str, output: &str) -> Result<ExitCode> {
    match encode_to_file(input, output) {
        Ok(summary) => {
            CommandOutput::success(summary).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            CommandOutput::<WavSummary>::failure(vec![error]).print()?;
            Ok(ExitCode::from(1))
        }
    }
}

/// Decodes the payload at `input` and writes the WAV to `output`.
///
/// Nothing is written unless the whole payload decodes.
pub fn encode_to_file(input: &str, output: &str) -> Result<WavSummary, JsonError> {
    let payload = read_payload(input)
        .map_err(|e| JsonError::new(error_codes::FILE_READ, format!("{:#}", e)).with_file(input))?;

    let blob = create_wav_blob(&payload).map_err(|e| JsonError::from_audio(&e).with_file(input))?;

    blob.save(output).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write WAV file: {}", e),
        )
        .with_file(output)
    })?;

    Ok(WavSummary::from_blob(&blob, Some(output.to_string())))
}
