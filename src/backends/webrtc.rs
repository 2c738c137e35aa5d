//! Classifier backed by the WebRTC narrowband VAD (`webrtc-vad`, a libfvad binding).

use webrtc_vad::{SampleRate, Vad, VadMode};

use crate::classifier::{Classifier, valid_rate_and_frame_length};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::pcm::{BYTES_PER_SAMPLE, pcm16_to_i16};

/// WebRTC VAD handle.
///
/// The native handle keeps smoothing state between frames, so reuse one instance per audio
/// stream rather than creating one per call.
pub struct WebRtcClassifier {
    vad: Vad,
    sample_rate: u32,
}

impl WebRtcClassifier {
    /// Create and initialize a native handle for `sample_rate`.
    pub fn new(sample_rate: u32) -> Result<Self> {
        let vad = Vad::new_with_rate(native_rate(sample_rate)?);
        Ok(Self { vad, sample_rate })
    }
}

impl Classifier for WebRtcClassifier {
    fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.vad.set_mode(native_mode(mode));
        Ok(())
    }

    fn classify(&mut self, frame: &[u8], sample_rate: u32) -> Result<bool> {
        if sample_rate != self.sample_rate {
            self.vad.set_sample_rate(native_rate(sample_rate)?);
            self.sample_rate = sample_rate;
        }

        // libfvad reads exactly `frame_length` samples; a short or odd buffer must never reach it.
        let frame_length = frame.len() / BYTES_PER_SAMPLE;
        if frame.len() % BYTES_PER_SAMPLE != 0
            || !valid_rate_and_frame_length(sample_rate, frame_length)
        {
            return Err(Error::classifier(format!(
                "invalid frame of {} bytes at {sample_rate} Hz",
                frame.len()
            )));
        }

        let samples = pcm16_to_i16(frame);
        self.vad
            .is_voice_segment(&samples)
            .map_err(|()| Error::classifier("webrtc vad rejected frame"))
    }
}

fn native_rate(sample_rate: u32) -> Result<SampleRate> {
    match sample_rate {
        8_000 => Ok(SampleRate::Rate8kHz),
        16_000 => Ok(SampleRate::Rate16kHz),
        32_000 => Ok(SampleRate::Rate32kHz),
        48_000 => Ok(SampleRate::Rate48kHz),
        other => Err(Error::classifier(format!(
            "webrtc vad does not support {other} Hz"
        ))),
    }
}

fn native_mode(mode: Mode) -> VadMode {
    match mode {
        Mode::Quality => VadMode::Quality,
        Mode::LowBitrate => VadMode::LowBitrate,
        Mode::Aggressive => VadMode::Aggressive,
        Mode::VeryAggressive => VadMode::VeryAggressive,
    }
}
