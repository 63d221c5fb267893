//! Inspect command implementation
//!
//! Reads a WAV file and reports its header fields and payload hash.

use anyhow::Result;
use colored::Colorize;
use podwave_audio::wav::{compute_pcm_hash, HEADER_LEN};
use podwave_audio::WavHeader;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, InspectResult, JsonError, WavSummary};
use super::reporting::print_wav_summary;
use crate::input::read_file;

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the header parses, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        match inspect_file(input) {
            Ok(result) => {
                CommandOutput::success(result).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                CommandOutput::<InspectResult>::failure(vec![error]).print()?;
                Ok(ExitCode::from(1))
            }
        }
    } else {
        println!("{} {}", "Inspecting:".cyan().bold(), input);

        let result = inspect_file(input).map_err(|e| anyhow::anyhow!(e.message))?;
        print_wav_summary(&result.wav);

        if result.warnings.is_empty() {
            println!("{}", "Header is consistent".green().bold());
        } else {
            println!("\n{}", "Warnings:".yellow().bold());
            for warning in &result.warnings {
                println!("  {} {}", "!".yellow(), warning);
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Parses the WAV file at `input`.
pub fn inspect_file(input: &str) -> Result<InspectResult, JsonError> {
    let bytes = read_file(Path::new(input))
        .map_err(|e| JsonError::new(error_codes::FILE_READ, format!("{:#}", e)).with_file(input))?;
    inspect_bytes(&bytes, Some(input.to_string()))
}

/// Parses WAV bytes and checks the size fields against the actual length.
pub fn inspect_bytes(bytes: &[u8], path: Option<String>) -> Result<InspectResult, JsonError> {
    let header = WavHeader::parse(bytes).map_err(|e| {
        let error = JsonError::from_audio(&e);
        match &path {
            Some(p) => error.with_file(p.clone()),
            None => error,
        }
    })?;

    let mut wav = WavSummary::from_header(&header, bytes.len(), path);
    wav.pcm_hash = compute_pcm_hash(bytes);

    Ok(InspectResult {
        warnings: header_warnings(&header, bytes.len()),
        wav,
    })
}

/// Lists header fields that disagree with the file length or format.
fn header_warnings(header: &WavHeader, file_len: usize) -> Vec<String> {
    let mut warnings = Vec::new();

    let expected_chunk = file_len.saturating_sub(8);
    if header.chunk_size as usize != expected_chunk {
        warnings.push(format!(
            "RIFF chunk size is {} but file length implies {}",
            header.chunk_size, expected_chunk
        ));
    }

    let available = file_len.saturating_sub(HEADER_LEN);
    if header.data_size as usize != available {
        warnings.push(format!(
            "data chunk declares {} bytes but {} follow the header",
            header.data_size, available
        ));
    }

    if header.format.block_align().ok() != Some(header.block_align) {
        warnings.push(format!(
            "block align {} does not match {} ch x {}-bit",
            header.block_align, header.format.channels, header.format.bits_per_sample
        ));
    }

    if header.format.byte_rate().ok() != Some(header.byte_rate) {
        warnings.push(format!(
            "byte rate {} does not match {} Hz x block align",
            header.byte_rate, header.format.sample_rate
        ));
    }

    warnings
}
