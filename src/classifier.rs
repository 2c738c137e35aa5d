use crate::config::{SUPPORTED_FRAME_DURATIONS_MS, SUPPORTED_SAMPLE_RATES};
use crate::error::Result;
use crate::mode::Mode;

/// Pluggable per-frame speech classifier used by [`crate::Framer`].
///
/// A classifier receives exactly one frame of little-endian PCM16 audio at a time and answers
/// "speech" or "not speech". Implementations may keep internal smoothing state keyed on the
/// mode, which is why every method takes `&mut self` and one framer owns one classifier.
pub trait Classifier {
    /// Change aggressiveness for all subsequent frames.
    fn set_mode(&mut self, mode: Mode) -> Result<()>;

    /// Classify one frame.
    ///
    /// The framer guarantees `frame.len()` equals the configured frame byte length, which is
    /// always an accepted length for `sample_rate`.
    fn classify(&mut self, frame: &[u8], sample_rate: u32) -> Result<bool>;

    /// Whether this classifier can handle frames of `frame_length` samples at `rate`.
    fn accepts(&self, rate: u32, frame_length: usize) -> bool {
        valid_rate_and_frame_length(rate, frame_length)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn set_mode(&mut self, mode: Mode) -> Result<()> {
        (**self).set_mode(mode)
    }

    fn classify(&mut self, frame: &[u8], sample_rate: u32) -> Result<bool> {
        (**self).classify(frame, sample_rate)
    }

    fn accepts(&self, rate: u32, frame_length: usize) -> bool {
        (**self).accepts(rate, frame_length)
    }
}

/// True when `frame_length` samples is a 10, 20 or 30 ms frame at a supported `rate`.
pub fn valid_rate_and_frame_length(rate: u32, frame_length: usize) -> bool {
    if !SUPPORTED_SAMPLE_RATES.contains(&rate) {
        return false;
    }

    SUPPORTED_FRAME_DURATIONS_MS
        .iter()
        .any(|ms| (rate * ms / 1000) as usize == frame_length)
}
