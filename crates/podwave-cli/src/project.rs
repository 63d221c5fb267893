//! Saved podcast projects and export file naming.
//!
//! A project file is the JSON document the studio saves: the podcast idea,
//! its sources and speakers, and the ordered list of segments. Only the
//! fields needed to export audio are read; everything else is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Fallback slug when the podcast idea is empty.
pub const DEFAULT_PROJECT_SLUG: &str = "podcast";

/// A saved podcast project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The podcast idea (used as the project title).
    #[serde(default)]
    pub podcast_idea: String,
    /// Segments in playback order.
    pub segments: Vec<Segment>,
}

/// One segment of the podcast script.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment title.
    #[serde(default)]
    pub title: String,
    /// Base64 PCM narration, if it has been generated.
    #[serde(default)]
    pub generated_audio: Option<String>,
}

impl Project {
    /// Parses a project from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse project JSON")
    }

    /// Loads a project file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid project file: {}", path.display()))
    }

    /// Segments that carry narration, with their audio, in order.
    pub fn narrated_segments(&self) -> impl Iterator<Item = (&Segment, &str)> {
        self.segments.iter().filter_map(|segment| {
            segment
                .generated_audio
                .as_deref()
                .filter(|audio| !audio.is_empty())
                .map(|audio| (segment, audio))
        })
    }

    /// Slug of the podcast idea, or `podcast` when the idea is empty.
    pub fn slug(&self) -> String {
        if self.podcast_idea.is_empty() {
            DEFAULT_PROJECT_SLUG.to_string()
        } else {
            slugify(&self.podcast_idea)
        }
    }

    /// File name of the combined narration.
    pub fn full_audio_file_name(&self) -> String {
        format!("{}_full.wav", self.slug())
    }
}

/// File name for the `index`-th narrated segment (1-based).
pub fn segment_file_name(index: usize, title: &str) -> String {
    format!("segment_{:02}_{}.wav", index, slugify(title))
}

/// Replaces every character outside `[A-Za-z0-9]` with `_` and lowercases.
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
