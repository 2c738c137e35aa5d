//! Framing configuration.
//!
//! This is *library-level configuration*: callers build it in code or load it from JSON, and
//! [`FramerConfig::validate`] turns it into the derived frame geometry the framer works with.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::pcm::BYTES_PER_SAMPLE;

/// Sample rates the narrowband classifier accepts (Hz).
pub const SUPPORTED_SAMPLE_RATES: [u32; 4] = [8_000, 16_000, 32_000, 48_000];

/// Frame durations the narrowband classifier accepts (ms).
pub const SUPPORTED_FRAME_DURATIONS_MS: [u32; 3] = [10, 20, 30];

pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;
pub const DEFAULT_FRAME_DURATION_MS: u32 = 10;
pub const DEFAULT_MIN_SPEECH_MS: u32 = 200;

/// Options that control how a waveform is framed and classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramerConfig {
    /// Classifier aggressiveness. `None` leaves the classifier's own default in place.
    pub mode: Option<Mode>,

    /// Input sample rate in Hz. Must be one of [`SUPPORTED_SAMPLE_RATES`].
    pub sample_rate: u32,

    /// Duration of one classification frame. Must be one of [`SUPPORTED_FRAME_DURATIONS_MS`].
    pub frame_duration_ms: u32,

    /// Shortest speech run callers intend to keep.
    ///
    /// Only converted to a frame count ([`FrameGeometry::min_frames`]); the framer itself never
    /// filters decisions. See [`crate::speech::speech_runs`] for opt-in filtering.
    pub min_speech_ms: u32,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            mode: Some(Mode::Quality),
            sample_rate: DEFAULT_SAMPLE_RATE,
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            min_speech_ms: DEFAULT_MIN_SPEECH_MS,
        }
    }
}

/// Frame sizes derived from a validated [`FramerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub frame_samples: usize,
    pub frame_bytes: usize,
    pub min_frames: usize,
}

impl FramerConfig {
    /// Parse a JSON document. Missing fields fall back to [`FramerConfig::default`].
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Check the rate/duration pair and derive the frame geometry.
    pub fn validate(&self) -> Result<FrameGeometry> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(Error::config(format!(
                "sample rate must be one of 8000, 16000, 32000 or 48000 Hz, got {}",
                self.sample_rate
            )));
        }

        if !SUPPORTED_FRAME_DURATIONS_MS.contains(&self.frame_duration_ms) {
            return Err(Error::config(format!(
                "frame duration must be 10, 20 or 30 ms, got {}",
                self.frame_duration_ms
            )));
        }

        let frame_samples = (self.sample_rate * self.frame_duration_ms / 1000) as usize;

        Ok(FrameGeometry {
            frame_samples,
            frame_bytes: frame_samples * BYTES_PER_SAMPLE,
            min_frames: (self.min_speech_ms / self.frame_duration_ms) as usize,
        })
    }
}
