use tracing::debug;

use crate::classifier::Classifier;
use crate::error::Result;
use crate::framer::Framer;

/// Streaming adapter over [`Framer`].
///
/// Audio arrives in arbitrary chunks. Each [`FramerStream::push`] classifies every complete
/// frame available so far and carries the unaligned tail into the next push, so no sample is
/// classified twice and none is skipped. [`FramerStream::flush`] pads and classifies whatever
/// tail is left at end of stream.
///
/// Pushing a waveform in any split and then flushing yields the same decisions as one
/// `framer.process(wav, false)` call over the whole waveform.
pub struct FramerStream<C> {
    framer: Framer<C>,
    pending: Vec<f32>,
    frames_emitted: usize,
}

impl<C: Classifier> FramerStream<C> {
    pub fn new(framer: Framer<C>) -> Self {
        Self {
            framer,
            pending: Vec::new(),
            frames_emitted: 0,
        }
    }

    /// Classify all complete frames in `pending + chunk`, keeping the rest for later.
    ///
    /// On error the carried tail is left as it was before the call.
    pub fn push(&mut self, chunk: &[f32]) -> Result<Vec<bool>> {
        let mut window = Vec::with_capacity(self.pending.len() + chunk.len());
        window.extend_from_slice(&self.pending);
        window.extend_from_slice(chunk);

        let out = self.framer.process(&window, true)?;

        let consumed = window.len() - out.remainder;
        window.drain(..consumed);
        self.pending = window;
        self.frames_emitted += out.decisions.len();

        Ok(out.decisions)
    }

    /// Pad and classify the carried tail, if any.
    pub fn flush(&mut self) -> Result<Vec<bool>> {
        if self.pending.is_empty() {
            return Ok(Vec::new());
        }

        let out = self.framer.process(&self.pending, false)?;
        debug!(
            padded_samples = self.pending.len(),
            frames = out.decisions.len(),
            "flushed stream tail"
        );

        self.pending.clear();
        self.frames_emitted += out.decisions.len();
        Ok(out.decisions)
    }

    /// Samples carried over to the next push.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total frames classified since creation.
    pub fn frames_emitted(&self) -> usize {
        self.frames_emitted
    }

    pub fn framer(&self) -> &Framer<C> {
        &self.framer
    }

    pub fn framer_mut(&mut self) -> &mut Framer<C> {
        &mut self.framer
    }

    pub fn into_framer(self) -> Framer<C> {
        self.framer
    }
}
