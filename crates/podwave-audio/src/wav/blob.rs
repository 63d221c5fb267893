//! Finished WAV files as owned, MIME-tagged byte buffers.

use std::io::Write;
use std::path::Path;

use super::format::PcmFormat;
use super::header::{WavHeader, HEADER_LEN};
use super::pcm::hash_pcm;
use super::writer::assemble;
use crate::error::AudioResult;

/// MIME type of every blob produced by this crate.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// A complete WAV file: 44-byte header followed by the PCM payload.
///
/// The bytes are immutable once built and can be played, uploaded or written
/// to a `.wav` file unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBlob {
    header: WavHeader,
    bytes: Vec<u8>,
}

impl WavBlob {
    /// Wraps raw PCM bytes in a WAV container.
    pub fn from_pcm(format: &PcmFormat, pcm_data: &[u8]) -> AudioResult<Self> {
        let header = WavHeader::new(format, pcm_data.len())?;
        let bytes = assemble(&header, pcm_data);
        Ok(Self { header, bytes })
    }

    /// Always `audio/wav`.
    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    /// The header fields describing this file.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// The complete file bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the blob and returns the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total file length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true; even an empty payload carries a header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The PCM payload following the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Payload length in bytes.
    pub fn data_len(&self) -> usize {
        self.bytes.len() - HEADER_LEN
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.header.format.duration_seconds(self.data_len())
    }

    /// BLAKE3 hash of the PCM payload only, as 64 hex characters.
    pub fn pcm_hash(&self) -> String {
        hash_pcm(self.pcm_data())
    }

    /// Writes the file bytes to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> AudioResult<()> {
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Writes the file to disk, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AudioResult<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

impl AsRef<[u8]> for WavBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<WavBlob> for Vec<u8> {
    fn from(blob: WavBlob) -> Self {
        blob.bytes
    }
}
