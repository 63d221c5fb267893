//! Base64 speech payload to WAV blob.

use crate::error::AudioResult;
use crate::pcm::decode_base64_pcm;
use crate::wav::{PcmFormat, WavBlob};

/// Converts a base64 PCM payload from the speech API into a playable WAV.
///
/// The payload is treated as 24 kHz mono 16-bit PCM. The result is
/// `44 + N` bytes long, where `N` is the decoded payload length.
///
/// # Errors
/// Fails with [`AudioError::Decode`](crate::AudioError::Decode) on invalid
/// base64 and [`AudioError::PayloadTooLarge`](crate::AudioError::PayloadTooLarge)
/// when the payload cannot be described by a WAV header. No buffer is
/// returned on failure.
pub fn create_wav_blob(base64_pcm: &str) -> AudioResult<WavBlob> {
    let pcm = decode_base64_pcm(base64_pcm)?;
    WavBlob::from_pcm(&PcmFormat::SPEECH, &pcm)
}

/// Joins several base64 PCM payloads into a single WAV.
///
/// Each part is decoded on its own before concatenation, so padded parts
/// join cleanly. Parts are kept in order; an empty slice yields a header-only
/// file. Any part that fails to decode fails the whole call.
pub fn create_wav_blob_from_parts<S: AsRef<str>>(parts: &[S]) -> AudioResult<WavBlob> {
    let mut pcm = Vec::new();
    for part in parts {
        pcm.extend_from_slice(&decode_base64_pcm(part.as_ref())?);
    }
    WavBlob::from_pcm(&PcmFormat::SPEECH, &pcm)
}
