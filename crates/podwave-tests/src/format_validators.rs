//! Independent WAV parser for test assertions.
//!
//! Deliberately shares no code with `podwave-audio`: it walks the RIFF chunk
//! list the way a generic decoder would and reports what it finds.

use std::fmt;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "WAV error at offset {}: {}", offset, self.message)
        } else {
            write!(f, "WAV error: {}", self.message)
        }
    }
}

impl std::error::Error for FormatError {}

/// Information extracted from a WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// RIFF chunk size field.
    pub riff_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate field.
    pub byte_rate: u32,
    /// Block alignment field.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Offset of the data chunk payload.
    pub data_offset: usize,
    /// Declared data chunk size.
    pub data_size: u32,
    /// Chunk ids in file order.
    pub chunk_ids: Vec<String>,
}

/// Validate WAV file format and extract header information.
///
/// Checks the RIFF/WAVE identifiers, requires a `fmt ` chunk before `data`,
/// and requires the data chunk to fit inside the file.
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    if data.len() < 12 {
        return Err(FormatError::new(format!(
            "File too short: {} bytes",
            data.len()
        )));
    }
    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset("Invalid RIFF header", 0));
    }
    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset("Invalid WAVE format", 8));
    }

    let riff_size = le_u32(&data[4..8]);
    let mut chunk_ids = Vec::new();
    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;
    let mut offset = 12;

    while offset + 8 <= data.len() {
        let chunk_id = String::from_utf8_lossy(&data[offset..offset + 4]).to_string();
        let chunk_size = le_u32(&data[offset + 4..offset + 8]);
        let body = offset + 8;
        chunk_ids.push(chunk_id.clone());

        match chunk_id.as_str() {
            "fmt " => {
                if chunk_size < 16 || body + 16 > data.len() {
                    return Err(FormatError::at_offset("Truncated fmt chunk", offset));
                }
                let f = &data[body..body + 16];
                fmt = Some((
                    le_u16(&f[0..2]),
                    le_u16(&f[2..4]),
                    le_u32(&f[4..8]),
                    le_u32(&f[8..12]),
                    le_u16(&f[12..14]),
                    le_u16(&f[14..16]),
                ));
            }
            "data" => {
                let (audio_format, channels, sample_rate, byte_rate, block_align, bits_per_sample) =
                    fmt.ok_or_else(|| {
                        FormatError::at_offset("data chunk found before fmt chunk", offset)
                    })?;
                if body + chunk_size as usize > data.len() {
                    return Err(FormatError::at_offset("Truncated data chunk", offset));
                }
                return Ok(WavInfo {
                    riff_size,
                    audio_format,
                    channels,
                    sample_rate,
                    byte_rate,
                    block_align,
                    bits_per_sample,
                    data_offset: body,
                    data_size: chunk_size,
                    chunk_ids,
                });
            }
            _ => {}
        }

        offset = body + ((chunk_size as usize + 1) & !1);
    }

    Err(FormatError::new("Missing data chunk"))
}

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_wav(data: &[u8]) -> Vec<u8> {
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&8000u32.to_le_bytes());
        wav.extend_from_slice(&16000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
        wav.extend_from_slice(data);
        wav
    }

    #[test]
    fn test_validate_minimal() {
        let info = validate_wav(&minimal_wav(&[0, 0, 1, 0])).unwrap();
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.data_offset, 44);
        assert_eq!(info.data_size, 4);
        assert_eq!(info.chunk_ids, vec!["fmt ", "data"]);
    }

    #[test]
    fn test_validate_truncated_data() {
        let mut wav = minimal_wav(&[0, 0, 1, 0]);
        wav.pop();
        let err = validate_wav(&wav).unwrap_err();
        assert!(err.message.contains("Truncated data"));
    }

    #[test]
    fn test_validate_bad_riff() {
        let mut wav = minimal_wav(&[]);
        wav[0] = b'X';
        assert_eq!(validate_wav(&wav).unwrap_err().offset, Some(0));
    }
}
