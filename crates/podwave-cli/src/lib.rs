//! PodWave CLI library.
//!
//! This crate provides the core functionality for the PodWave CLI: encoding
//! speech payloads to WAV, inspecting WAV headers and exporting the narrated
//! segments of a saved podcast project.

pub mod commands;
pub mod input;
pub mod project;
