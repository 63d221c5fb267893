//! PCM format parameters and the fixed speech format.

use crate::error::{AudioError, AudioResult};

/// Sample rate of the speech API's PCM output in Hz.
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

/// Channel count of the speech API's PCM output (mono).
pub const SPEECH_CHANNELS: u16 = 1;

/// Bit depth of the speech API's PCM output.
pub const SPEECH_BITS_PER_SAMPLE: u16 = 16;

/// Linear PCM format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// 24 kHz mono 16-bit, the format every speech payload arrives in.
    pub const SPEECH: PcmFormat = PcmFormat {
        channels: SPEECH_CHANNELS,
        sample_rate: SPEECH_SAMPLE_RATE,
        bits_per_sample: SPEECH_BITS_PER_SAMPLE,
    };

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> AudioResult<u16> {
        self.channels
            .checked_mul(self.bytes_per_sample())
            .ok_or_else(|| AudioError::invalid_format("block align overflows u16"))
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> AudioResult<u32> {
        self.sample_rate
            .checked_mul(u32::from(self.block_align()?))
            .ok_or_else(|| AudioError::invalid_format("byte rate overflows u32"))
    }

    /// Duration in seconds of `data_len` payload bytes.
    ///
    /// Partial trailing frames are ignored. Returns 0.0 for a zero-width format.
    pub fn duration_seconds(&self, data_len: usize) -> f64 {
        match self.block_align() {
            Ok(align) if align > 0 && self.sample_rate > 0 => {
                let frames = data_len / usize::from(align);
                frames as f64 / self.sample_rate as f64
            }
            _ => 0.0,
        }
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::SPEECH
    }
}
