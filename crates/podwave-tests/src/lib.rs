//! PodWave End-to-End Test Infrastructure
//!
//! This crate holds the integration tests for the encoding pipeline:
//!
//! - Encoding: base64 payload -> WAV bytes, checked byte by byte
//! - CLI: encode / inspect / export against real files
//! - Properties: layout invariants over arbitrary payloads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p podwave-tests
//! ```
//!
//! The [`format_validators`] module parses WAV files without going through
//! `podwave-audio`, so tests never validate the writer with its own reader.

pub mod fixtures;
pub mod format_validators;
