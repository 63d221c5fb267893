//! Canonical 44-byte RIFF/WAVE header for uncompressed PCM.

use super::format::PcmFormat;
use crate::error::{AudioError, AudioResult};

/// Length of the canonical PCM WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Header bytes counted by the RIFF chunk size in addition to the payload.
const RIFF_OVERHEAD: u32 = 36;

/// Size of a plain PCM `fmt ` chunk body.
const FMT_CHUNK_SIZE: u32 = 16;

/// `AudioFormat` tag for linear PCM.
const PCM_FORMAT_TAG: u16 = 1;

/// Field values of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Channel count, sample rate and bit depth.
    pub format: PcmFormat,
    /// RIFF chunk size (file length minus 8).
    pub chunk_size: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Length of the `data` chunk payload.
    pub data_size: u32,
}

impl WavHeader {
    /// Builds the header describing `data_len` payload bytes in `format`.
    ///
    /// # Errors
    /// [`AudioError::PayloadTooLarge`] when `data_len + 36` does not fit in a
    /// `u32`, [`AudioError::InvalidFormat`] when byte rate or block align
    /// overflow their fields.
    pub fn new(format: &PcmFormat, data_len: usize) -> AudioResult<Self> {
        let too_large = || AudioError::PayloadTooLarge { len: data_len };
        let data_size = u32::try_from(data_len).map_err(|_| too_large())?;
        let chunk_size = data_size.checked_add(RIFF_OVERHEAD).ok_or_else(too_large)?;

        Ok(Self {
            format: *format,
            chunk_size,
            byte_rate: format.byte_rate()?,
            block_align: format.block_align()?,
            data_size,
        })
    }

    /// Total file length (header plus payload) this header describes.
    pub fn file_len(&self) -> usize {
        HEADER_LEN + self.data_size as usize
    }

    /// Serializes the header, all integers little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];

        // RIFF header
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");

        // fmt chunk
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        out[20..22].copy_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
        out[22..24].copy_from_slice(&self.format.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.format.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.format.bits_per_sample.to_le_bytes());

        // data chunk
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        out
    }

    /// Reads a canonical PCM header from the start of `bytes`.
    ///
    /// Only the 44-byte layout this crate writes is accepted: `fmt ` must be
    /// the first sub-chunk with a 16-byte body and format tag 1, directly
    /// followed by `data`. Use [`extract_pcm_data`](super::extract_pcm_data)
    /// for files with extra chunks.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(AudioError::invalid_wav(
                format!(
                    "file too short: {} bytes (minimum {} required)",
                    bytes.len(),
                    HEADER_LEN
                ),
                bytes.len(),
            ));
        }

        expect_tag(bytes, 0, b"RIFF")?;
        expect_tag(bytes, 8, b"WAVE")?;
        expect_tag(bytes, 12, b"fmt ")?;

        let fmt_size = read_u32(bytes, 16);
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(AudioError::invalid_wav(
                format!("expected 16-byte fmt chunk, found {} bytes", fmt_size),
                16,
            ));
        }

        let audio_format = read_u16(bytes, 20);
        if audio_format != PCM_FORMAT_TAG {
            return Err(AudioError::invalid_wav(
                format!("expected PCM audio format 1, found {}", audio_format),
                20,
            ));
        }

        expect_tag(bytes, 36, b"data")?;

        Ok(Self {
            format: PcmFormat {
                channels: read_u16(bytes, 22),
                sample_rate: read_u32(bytes, 24),
                bits_per_sample: read_u16(bytes, 34),
            },
            chunk_size: read_u32(bytes, 4),
            byte_rate: read_u32(bytes, 28),
            block_align: read_u16(bytes, 32),
            data_size: read_u32(bytes, 40),
        })
    }
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> AudioResult<()> {
    let found = &bytes[offset..offset + 4];
    if found == tag {
        Ok(())
    } else {
        Err(AudioError::invalid_wav(
            format!(
                "expected '{}', got {:?}",
                String::from_utf8_lossy(tag),
                found
            ),
            offset,
        ))
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
