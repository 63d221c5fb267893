//! Deterministic WAV container writer.
//!
//! Produces the canonical 44-byte PCM header followed by the payload, with no
//! extra chunks or variable metadata. The same payload always yields the same
//! bytes.

mod blob;
mod format;
mod header;
mod pcm;
mod writer;


pub use blob::{WavBlob, WAV_MIME_TYPE};
pub use format::{PcmFormat, SPEECH_BITS_PER_SAMPLE, SPEECH_CHANNELS, SPEECH_SAMPLE_RATE};
pub use header::{WavHeader, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
