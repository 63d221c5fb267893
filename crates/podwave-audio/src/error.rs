//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while building or reading WAV data.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The PCM payload is not valid base64.
    #[error("invalid base64 PCM payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The payload is too large to be described by the 32-bit header fields.
    #[error("PCM payload of {len} bytes does not fit in a WAV header")]
    PayloadTooLarge {
        /// Payload length in bytes.
        len: usize,
    },

    /// The PCM format parameters produce unrepresentable header fields.
    #[error("invalid PCM format: {message}")]
    InvalidFormat {
        /// Error message.
        message: String,
    },

    /// The bytes are not a canonical PCM WAV file.
    #[error("invalid WAV data at offset {offset}: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
        /// Byte offset where parsing stopped.
        offset: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error at the given offset.
    pub fn invalid_wav(message: impl Into<String>, offset: usize) -> Self {
        Self::InvalidWav {
            message: message.into(),
            offset,
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode(_) => "AUDIO_001",
            AudioError::PayloadTooLarge { .. } => "AUDIO_002",
            AudioError::InvalidFormat { .. } => "AUDIO_003",
            AudioError::InvalidWav { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "audio"
    }
}
