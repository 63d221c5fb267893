//! Test fixture utilities for speech payloads and saved projects.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample rate of the speech payloads the fixtures imitate.
pub const FIXTURE_SAMPLE_RATE: u32 = 24_000;

/// Little-endian 16-bit PCM bytes of a sine tone.
pub fn sine_pcm(freq_hz: f64, num_samples: usize, amplitude: f64) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(num_samples * 2);
    for i in 0..num_samples {
        let t = i as f64 / FIXTURE_SAMPLE_RATE as f64;
        let value = (amplitude * (2.0 * std::f64::consts::PI * freq_hz * t).sin()).clamp(-1.0, 1.0);
        let sample = (value * 32767.0).round() as i16;
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Little-endian 16-bit PCM bytes of the given samples.
pub fn samples_to_pcm(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Encodes PCM bytes the way the speech API does (padded base64).
pub fn speech_payload(pcm: &[u8]) -> String {
    STANDARD.encode(pcm)
}

/// Encodes PCM bytes as base64 without trailing padding.
pub fn speech_payload_unpadded(pcm: &[u8]) -> String {
    STANDARD_NO_PAD.encode(pcm)
}

/// A temporary directory holding a saved podcast project.
pub struct ProjectFixture {
    pub root: TempDir,
    pub project_path: PathBuf,
}

impl ProjectFixture {
    /// Writes a project with the given idea and `(title, audio)` segments.
    ///
    /// Segments with `None` audio have not been narrated yet.
    pub fn new(idea: &str, segments: &[(&str, Option<&str>)]) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let project_path = root.path().join("project.json");

        let segments: Vec<serde_json::Value> = segments
            .iter()
            .enumerate()
            .map(|(i, (title, audio))| {
                serde_json::json!({
                    "id": i + 1,
                    "title": title,
                    "content": format!("script for {}", title),
                    "isExpanded": false,
                    "generatedAudio": audio,
                })
            })
            .collect();

        let project = serde_json::json!({
            "podcastIdea": idea,
            "podcastSources": "",
            "uploadedFileNames": [],
            "speakers": [
                {"id": 1, "name": "Host", "voiceId": "Kore"},
                {"id": 2, "name": "Guest", "voiceId": "Puck"}
            ],
            "segments": segments,
        });

        fs::write(
            &project_path,
            serde_json::to_string_pretty(&project).expect("Failed to serialize project"),
        )
        .expect("Failed to write project file");

        Self { root, project_path }
    }

    /// Project root directory.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Project file path as a string.
    pub fn project(&self) -> &str {
        self.project_path.to_str().expect("temp paths are UTF-8")
    }

    /// Export directory inside the fixture.
    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("export")
    }
}
