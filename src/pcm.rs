//! Float waveform to PCM16 conversion.
//!
//! Samples are rescaled linearly from `[-1.0, 1.0]` onto the full signed 16-bit range:
//! `-1.0` lands on `i16::MIN`, `1.0` on `i16::MAX`. Values outside that range are clamped,
//! never wrapped. Rounding is round-half-to-even, so `0.0` (which rescales to `-0.5`) encodes
//! as `0`.

use crate::error::{Error, Result};

/// Bytes per encoded PCM16 sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Convert normalized float samples into little-endian PCM16 bytes.
///
/// The output is always `2 * samples.len()` bytes. NaN encodes as `0`; callers that need to
/// reject non-finite input should run [`ensure_finite`] first.
pub fn to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for &s in samples {
        out.extend_from_slice(&sample_to_i16(s).to_le_bytes());
    }
    out
}

/// Rescale, clamp and round a single sample.
///
/// The arithmetic is done in `f64` so the result is identical across targets.
pub fn sample_to_i16(sample: f32) -> i16 {
    let scaled = ((f64::from(sample) + 1.0) * 65535.0 / 2.0) - 32768.0;
    let clipped = scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX));
    clipped.round_ties_even() as i16
}

/// Decode little-endian PCM16 bytes back into samples.
///
/// A trailing odd byte is ignored.
pub fn pcm16_to_i16(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

/// Fail on the first NaN or infinite sample.
pub fn ensure_finite(samples: &[f32]) -> Result<()> {
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(Error::InvalidSample {
            index,
            value: samples[index],
        }),
        None => Ok(()),
    }
}
