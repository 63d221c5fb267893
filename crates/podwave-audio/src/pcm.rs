//! Base64 decoding of raw PCM payloads.
//!
//! The speech API returns audio as standard-alphabet base64, sometimes with
//! and sometimes without trailing `=` padding. Both forms are accepted, as
//! are non-zero leftover bits in the final symbol. Foreign characters and
//! misplaced padding are hard errors.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::AudioResult;

/// Standard alphabet, padding optional, leftover bits ignored on decode.
const PCM_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a base64 PCM payload into its raw bytes.
///
/// The bytes are not interpreted; a length that is not a whole number of
/// sample frames is passed through unchanged.
///
/// # Errors
/// Returns [`AudioError::Decode`](crate::AudioError::Decode) for characters
/// outside the base64 alphabet or bad padding.
pub fn decode_base64_pcm(base64_pcm: &str) -> AudioResult<Vec<u8>> {
    Ok(PCM_BASE64.decode(base64_pcm)?)
}
