//! Export command implementation
//!
//! Writes the narrated segments of a saved project as individual WAV files,
//! and optionally one combined file for the whole podcast.

use anyhow::Result;
use colored::Colorize;
use podwave_audio::{create_wav_blob, create_wav_blob_from_parts, WavBlob};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, ExportResult, JsonError, WavSummary};
use super::reporting::print_wav_summary;
use crate::project::{segment_file_name, Project};

/// Run the export command
///
/// # Arguments
/// * `project_path` - Path to the saved project JSON
/// * `output_dir` - Directory receiving the WAV files (created if missing)
/// * `full` - Also write the combined narration
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(project_path: &str, output_dir: &str, full: bool, json_output: bool) -> Result<ExitCode> {
    if json_output {
        match export_project(project_path, output_dir, full) {
            Ok(result) => {
                CommandOutput::success(result).print()?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                CommandOutput::<ExportResult>::failure(vec![error]).print()?;
                Ok(ExitCode::from(1))
            }
        }
    } else {
        println!("{} {}", "Exporting:".cyan().bold(), project_path);
        println!("{} {}", "Output dir:".cyan().bold(), output_dir);

        let result =
            export_project(project_path, output_dir, full).map_err(|e| anyhow::anyhow!(e.message))?;

        for summary in &result.segments {
            println!();
            print_wav_summary(summary);
        }
        if let Some(summary) = &result.full {
            println!("\n{}", "Full podcast:".cyan().bold());
            print_wav_summary(summary);
        }

        println!(
            "\n{} {} segment file(s)",
            "Exported".green().bold(),
            result.segments.len()
        );

        Ok(ExitCode::SUCCESS)
    }
}

/// Encodes every narrated segment and writes the files.
///
/// All payloads are decoded before anything is written, so a corrupt segment
/// leaves the output directory untouched.
pub fn export_project(project_path: &str, output_dir: &str, full: bool) -> Result<ExportResult, JsonError> {
    let project = Project::load(Path::new(project_path)).map_err(|e| {
        let code = if e.downcast_ref::<std::io::Error>().is_some() {
            error_codes::FILE_READ
        } else {
            error_codes::PROJECT_PARSE
        };
        JsonError::new(code, format!("{:#}", e)).with_file(project_path)
    })?;

    let narrated: Vec<_> = project.narrated_segments().collect();
    if narrated.is_empty() {
        return Err(
            JsonError::new(error_codes::NO_AUDIO, "no generated audio to export")
                .with_file(project_path),
        );
    }

    let mut files: Vec<(String, WavBlob)> = Vec::with_capacity(narrated.len() + 1);
    for (index, (segment, audio)) in narrated.iter().enumerate() {
        let blob = create_wav_blob(audio).map_err(|e| {
            let mut error = JsonError::from_audio(&e).with_file(project_path);
            error.message = format!("segment '{}': {}", segment.title, error.message);
            error
        })?;
        files.push((segment_file_name(index + 1, &segment.title), blob));
    }

    let full_file = if full {
        let parts: Vec<&str> = narrated.iter().map(|(_, audio)| *audio).collect();
        let blob = create_wav_blob_from_parts(&parts)
            .map_err(|e| JsonError::from_audio(&e).with_file(project_path))?;
        Some((project.full_audio_file_name(), blob))
    } else {
        None
    };

    let out_dir = Path::new(output_dir);
    fs::create_dir_all(out_dir).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to create output directory: {}", e),
        )
        .with_file(output_dir)
    })?;

    let segments = files
        .iter()
        .map(|(name, blob)| write_blob(out_dir, name, blob))
        .collect::<Result<Vec<_>, _>>()?;
    let full = full_file
        .map(|(name, blob)| write_blob(out_dir, &name, &blob))
        .transpose()?;

    Ok(ExportResult { segments, full })
}

fn write_blob(out_dir: &Path, name: &str, blob: &WavBlob) -> Result<WavSummary, JsonError> {
    let path = out_dir.join(name);
    let display = path.to_string_lossy().to_string();
    blob.save(&path).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write WAV file: {}", e),
        )
        .with_file(display.clone())
    })?;
    Ok(WavSummary::from_blob(blob, Some(display)))
}
