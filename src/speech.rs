//! Opt-in post-processing of frame decisions.
//!
//! [`crate::Framer::process`] returns raw per-frame decisions and never drops short speech
//! runs. Callers that want the `min_speech_ms` policy applied run [`speech_runs`] over the
//! decisions with [`crate::Framer::min_frames`].

use std::ops::Range;

/// Frame-index ranges of consecutive speech frames, in order.
///
/// Runs shorter than `min_frames` are dropped; `0` or `1` keeps every run.
pub fn speech_runs(decisions: &[bool], min_frames: usize) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &speech) in decisions.iter().enumerate() {
        match (speech, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                push_run(&mut runs, s..i, min_frames);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        push_run(&mut runs, s..decisions.len(), min_frames);
    }

    runs
}

/// Convert a frame range into the sample range it covers.
pub fn frames_to_samples(frames: &Range<usize>, frame_samples: usize) -> Range<usize> {
    frames.start * frame_samples..frames.end * frame_samples
}

fn push_run(runs: &mut Vec<Range<usize>>, run: Range<usize>, min_frames: usize) {
    if run.len() >= min_frames {
        runs.push(run);
    }
}
