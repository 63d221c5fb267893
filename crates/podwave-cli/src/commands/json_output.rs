//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints exactly one
//! [`CommandOutput`] document to stdout.

use podwave_audio::{AudioError, WavBlob, WavHeader};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Audio errors pass through their own `AUDIO_xxx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Project JSON could not be parsed
    pub const PROJECT_PARSE: &str = "CLI_003";
    /// Project has no generated audio
    pub const NO_AUDIO: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches the file the error refers to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Converts an audio error, keeping its stable code.
    pub fn from_audio(err: &AudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Top-level JSON document printed by every command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Command result (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Prints the document to stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Description of one WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WavSummary {
    /// File path (when the WAV lives on disk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// MIME type
    pub mime_type: String,
    /// Total file size in bytes
    pub size_bytes: usize,
    /// PCM payload size in bytes
    pub data_bytes: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel count
    pub channels: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per sample frame
    pub block_align: u16,
    /// RIFF chunk size field
    pub chunk_size: u32,
    /// Playback duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl WavSummary {
    /// Summarizes a freshly built blob.
    pub fn from_blob(blob: &WavBlob, path: Option<String>) -> Self {
        let mut summary = Self::from_header(blob.header(), blob.len(), path);
        summary.duration_seconds = blob.duration_seconds();
        summary.pcm_hash = Some(blob.pcm_hash());
        summary
    }

    /// Summarizes a parsed header of a file of `size_bytes` bytes.
    pub fn from_header(header: &WavHeader, size_bytes: usize, path: Option<String>) -> Self {
        Self {
            path,
            mime_type: podwave_audio::WAV_MIME_TYPE.to_string(),
            size_bytes,
            data_bytes: header.data_size as usize,
            sample_rate: header.format.sample_rate,
            channels: header.format.channels,
            bits_per_sample: header.format.bits_per_sample,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            chunk_size: header.chunk_size,
            duration_seconds: header.format.duration_seconds(header.data_size as usize),
            pcm_hash: None,
        }
    }
}

/// Result of the inspect command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Header fields
    #[serde(flatten)]
    pub wav: WavSummary,
    /// Header inconsistencies that do not stop playback
    pub warnings: Vec<String>,
}

/// Result of the export command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportResult {
    /// One file per narrated segment, in order
    pub segments: Vec<WavSummary>,
    /// Combined narration (with `--full`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<WavSummary>,
}
