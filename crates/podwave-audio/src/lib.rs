//! PodWave Audio Core
//!
//! Turns the raw PCM audio returned by the speech API (base64 text) into a
//! canonical, playable WAV file.
//!
//! # Overview
//!
//! The speech API delivers 24 kHz mono 16-bit linear PCM with no container.
//! This crate decodes the base64 payload, prepends the 44-byte RIFF/WAVE
//! header describing it and hands back a [`WavBlob`] tagged `audio/wav`.
//!
//! # Determinism
//!
//! Encoding is a pure function of the input. There is no shared state, so
//! calls may run concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use podwave_audio::create_wav_blob;
//!
//! let blob = create_wav_blob("AAAAAAIAAAA=")?;
//! assert_eq!(blob.len(), 52);
//! assert_eq!(blob.mime_type(), "audio/wav");
//! assert_eq!(&blob.as_bytes()[0..4], b"RIFF");
//! # Ok::<(), podwave_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`create_wav_blob()`] - Main entry point
//! - [`create_wav_blob_from_parts()`] - Joins several payloads into one file
//! - [`pcm`] - Base64 payload decoding
//! - [`wav`] - Header builder, blob type and PCM extraction

pub mod encoder;
pub mod error;
pub mod pcm;
pub mod wav;

// Re-export main types at crate root
pub use encoder::{create_wav_blob, create_wav_blob_from_parts};
pub use error::{AudioError, AudioResult};
pub use wav::{PcmFormat, WavBlob, WavHeader, WAV_MIME_TYPE};
