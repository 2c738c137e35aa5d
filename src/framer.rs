//! Frame segmentation and per-frame decision aggregation.
//!
//! A [`Framer`] slices a float waveform into fixed-width PCM16 frames, hands each frame to its
//! [`Classifier`] in order, and collects one boolean per frame.
//!
//! Tail handling (`L` samples, frame width `W`, `rem = L % W`):
//! - `rem == 0`: every sample is classified, nothing is left over.
//! - `keep_remainder = true`: the last `rem` samples are not classified and `rem` is reported
//!   back. The framer does not keep them; a streaming caller must prepend `wav[L - rem..]` to
//!   its next chunk (or use [`crate::FramerStream`], which does exactly that).
//! - `keep_remainder = false`: the partial last frame is filled out to `W` samples by repeating
//!   its own `rem` samples cyclically, classified, and the remainder is reported as `0`.

use tracing::{debug, trace};

use crate::classifier::Classifier;
use crate::config::{FrameGeometry, FramerConfig};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::pcm::{BYTES_PER_SAMPLE, ensure_finite, to_pcm16};

/// Result of one [`Framer::process`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decisions {
    /// One entry per classified frame, in waveform order.
    pub decisions: Vec<bool>,

    /// Trailing samples that were not classified.
    pub remainder: usize,
}

impl Decisions {
    pub fn into_parts(self) -> (Vec<bool>, usize) {
        (self.decisions, self.remainder)
    }
}

/// Splits waveforms into classifier-sized frames and aggregates the per-frame decisions.
///
/// One framer owns one classifier. The classifier's mode state persists across calls, so
/// concurrent callers need one framer each.
pub struct Framer<C> {
    classifier: C,
    sample_rate: u32,
    frame_duration_ms: u32,
    mode: Option<Mode>,
    geometry: FrameGeometry,
}

impl<C: Classifier> Framer<C> {
    /// Validate `config`, check the classifier accepts the frame size, and apply the mode.
    pub fn new(mut classifier: C, config: &FramerConfig) -> Result<Self> {
        let geometry = config.validate()?;

        if !classifier.accepts(config.sample_rate, geometry.frame_samples) {
            return Err(Error::classifier(format!(
                "classifier rejected {} samples per frame at {} Hz",
                geometry.frame_samples, config.sample_rate
            )));
        }

        if let Some(mode) = config.mode {
            classifier.set_mode(mode)?;
        }

        debug!(
            sample_rate = config.sample_rate,
            frame_duration_ms = config.frame_duration_ms,
            frame_samples = geometry.frame_samples,
            min_frames = geometry.min_frames,
            "framer initialized"
        );

        Ok(Self {
            classifier,
            sample_rate: config.sample_rate,
            frame_duration_ms: config.frame_duration_ms,
            mode: config.mode,
            geometry,
        })
    }

    /// Positional constructor mirroring the fields of [`FramerConfig`].
    pub fn with_params(
        classifier: C,
        mode: Option<Mode>,
        sample_rate: u32,
        frame_duration_ms: u32,
        min_speech_ms: u32,
    ) -> Result<Self> {
        let config = FramerConfig {
            mode,
            sample_rate,
            frame_duration_ms,
            min_speech_ms,
        };
        Self::new(classifier, &config)
    }

    /// Forward a mode change to the classifier. Affects every later [`Framer::process`] call.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.classifier.set_mode(mode)?;
        self.mode = Some(mode);
        Ok(())
    }

    /// Classify `wav` frame by frame.
    ///
    /// See the module docs for how a tail shorter than one frame is treated in each mode.
    pub fn process(&mut self, wav: &[f32], keep_remainder: bool) -> Result<Decisions> {
        ensure_finite(wav)?;

        let window = self.geometry.frame_samples;
        let rem = wav.len() % window;

        let (pcm, remainder) = if rem == 0 {
            (to_pcm16(wav), 0)
        } else if keep_remainder {
            (to_pcm16(&wav[..wav.len() - rem]), rem)
        } else {
            let mut pcm = to_pcm16(wav);
            pad_cyclic(&mut pcm, rem, window);
            (pcm, 0)
        };

        let decisions = self.classify_frames(&pcm)?;

        debug!(
            samples = wav.len(),
            frames = decisions.len(),
            remainder,
            keep_remainder,
            "processed waveform"
        );

        Ok(Decisions {
            decisions,
            remainder,
        })
    }

    fn classify_frames(&mut self, pcm: &[u8]) -> Result<Vec<bool>> {
        let frames = pcm.chunks_exact(self.geometry.frame_bytes);
        debug_assert!(frames.remainder().is_empty(), "pcm is not frame aligned");

        let mut out = Vec::with_capacity(pcm.len() / self.geometry.frame_bytes);
        for (i, frame) in frames.enumerate() {
            let speech = self.classifier.classify(frame, self.sample_rate)?;
            trace!(frame = i, speech, "classified frame");
            out.push(speech);
        }
        Ok(out)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frame_duration_ms(&self) -> u32 {
        self.frame_duration_ms
    }

    /// Samples per frame.
    pub fn frame_samples(&self) -> usize {
        self.geometry.frame_samples
    }

    /// Bytes per PCM16 frame handed to the classifier.
    pub fn frame_bytes(&self) -> usize {
        self.geometry.frame_bytes
    }

    /// `min_speech_ms / frame_duration_ms`, floored.
    ///
    /// Exposed for callers that post-filter short speech runs; [`Framer::process`] never
    /// applies it.
    pub fn min_frames(&self) -> usize {
        self.geometry.min_frames
    }

    /// The last mode applied through this framer, if any.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn into_classifier(self) -> C {
        self.classifier
    }
}

/// Fill the last partial frame out to `window` samples by cycling its own `rem` samples.
///
/// `rem` must be non-zero and smaller than `window`.
fn pad_cyclic(pcm: &mut Vec<u8>, rem: usize, window: usize) {
    let tail_start = pcm.len() - rem * BYTES_PER_SAMPLE;
    let tail = pcm[tail_start..].to_vec();
    let fill = (window - rem) * BYTES_PER_SAMPLE;
    pcm.extend(tail.iter().cycle().take(fill));
}

#[cfg(feature = "webrtc")]
impl Framer<crate::backends::webrtc::WebRtcClassifier> {
    /// Build a framer backed by the bundled WebRTC classifier.
    pub fn webrtc(config: &FramerConfig) -> Result<Self> {
        config.validate()?;
        let classifier = crate::backends::webrtc::WebRtcClassifier::new(config.sample_rate)?;
        Self::new(classifier, config)
    }
}
