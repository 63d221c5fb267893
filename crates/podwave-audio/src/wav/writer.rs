//! Core WAV assembly: header followed by the raw payload.

use super::header::{WavHeader, HEADER_LEN};

/// Concatenates an already validated header and its payload.
///
/// The buffer is allocated once with room for header and payload.
pub(crate) fn assemble(header: &WavHeader, pcm_data: &[u8]) -> Vec<u8> {
    debug_assert_eq!(header.data_size as usize, pcm_data.len());
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header.to_bytes());
    buffer.extend_from_slice(pcm_data);
    buffer
}
