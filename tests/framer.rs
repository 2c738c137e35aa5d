use vadframe::pcm::{pcm16_to_i16, to_pcm16};
use vadframe::speech::speech_runs;
use vadframe::{Classifier, Error, Framer, FramerConfig, FramerStream, Mode, Result};

/// Alternates speech / silence on every call, ignoring the audio.
#[derive(Default)]
struct Alternating {
    calls: usize,
    frame_lens: Vec<usize>,
}

impl Classifier for Alternating {
    fn set_mode(&mut self, _mode: Mode) -> Result<()> {
        Ok(())
    }

    fn classify(&mut self, frame: &[u8], _sample_rate: u32) -> Result<bool> {
        self.frame_lens.push(frame.len());
        self.calls += 1;
        Ok(self.calls % 2 == 1)
    }
}

/// Speech when the frame's peak magnitude exceeds a threshold that depends on the mode.
struct Threshold {
    limit: i16,
}

impl Classifier for Threshold {
    fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.limit = 1_000 * (i16::from(mode.as_u8()) + 1);
        Ok(())
    }

    fn classify(&mut self, frame: &[u8], _sample_rate: u32) -> Result<bool> {
        let peak = pcm16_to_i16(frame)
            .into_iter()
            .map(|s| s.saturating_abs())
            .max()
            .unwrap_or(0);
        Ok(peak > self.limit)
    }
}

fn framer_16k_20ms() -> Framer<Alternating> {
    Framer::with_params(Alternating::default(), Some(Mode::Quality), 16_000, 20, 200)
        .expect("16 kHz / 20 ms is valid")
}

fn tone(len: usize, amplitude: f32) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (i as f32 * 0.05).sin())
        .collect()
}

#[test]
fn keep_mode_frame_count_is_aligned_length_over_window() -> Result<()> {
    for len in [0usize, 1, 319, 320, 321, 959, 960, 1_000] {
        let mut framer = framer_16k_20ms();
        let out = framer.process(&tone(len, 0.3), true)?;
        let rem = len % 320;
        assert_eq!(out.decisions.len(), (len - rem) / 320, "len {len}");
        assert_eq!(out.remainder, rem, "len {len}");
    }
    Ok(())
}

#[test]
fn pad_mode_frame_count_is_ceiling_and_remainder_is_zero() -> Result<()> {
    for len in [0usize, 1, 319, 320, 321, 959, 960, 1_000] {
        let mut framer = framer_16k_20ms();
        let out = framer.process(&tone(len, 0.3), false)?;
        assert_eq!(out.decisions.len(), len.div_ceil(320), "len {len}");
        assert_eq!(out.remainder, 0, "len {len}");
    }
    Ok(())
}

#[test]
fn classifier_only_ever_sees_full_frames() -> Result<()> {
    let mut framer = framer_16k_20ms();
    framer.process(&tone(1_111, 0.3), false)?;
    framer.process(&tone(1_111, 0.3), true)?;

    let lens = &framer.classifier().frame_lens;
    assert_eq!(lens.len(), 4 + 3);
    assert!(lens.iter().all(|&n| n == 640));
    Ok(())
}

#[test]
fn decisions_follow_frame_order() -> Result<()> {
    let mut framer = framer_16k_20ms();
    let out = framer.process(&tone(320 * 5, 0.3), true)?;
    assert_eq!(out.decisions, vec![true, false, true, false, true]);
    Ok(())
}

#[test]
fn exact_multiple_gives_two_frames_in_either_mode() -> Result<()> {
    let wav = tone(640, 0.3);
    for keep in [true, false] {
        let mut framer = framer_16k_20ms();
        let out = framer.process(&wav, keep)?;
        assert_eq!(out.decisions.len(), 2);
        assert_eq!(out.remainder, 0);
    }
    Ok(())
}

#[test]
fn empty_waveform_yields_nothing() -> Result<()> {
    let mut framer = framer_16k_20ms();
    assert_eq!(framer.process(&[], true)?.into_parts(), (vec![], 0));
    assert_eq!(framer.process(&[], false)?.into_parts(), (vec![], 0));
    assert_eq!(framer.classifier().calls, 0);
    Ok(())
}

#[test]
fn processing_is_deterministic() -> Result<()> {
    let wav: Vec<f32> = tone(5_000, 0.1)
        .into_iter()
        .zip(tone(5_000, 0.9).into_iter().rev())
        .enumerate()
        .map(|(i, (a, b))| if (i / 700) % 2 == 0 { a } else { b })
        .collect();

    for keep in [true, false] {
        let cfg = FramerConfig {
            mode: Some(Mode::Aggressive),
            sample_rate: 16_000,
            frame_duration_ms: 10,
            min_speech_ms: 200,
        };
        let mut a = Framer::new(Threshold { limit: 0 }, &cfg)?;
        let mut b = Framer::new(Threshold { limit: 0 }, &cfg)?;

        let first = a.process(&wav, keep)?;
        let again = a.process(&wav, keep)?;
        let fresh = b.process(&wav, keep)?;
        assert_eq!(first, again);
        assert_eq!(first, fresh);
    }
    Ok(())
}

#[test]
fn set_mode_changes_later_decisions() -> Result<()> {
    // Peak of 0.1 full scale is ~3277: above the Quality limit, below VeryAggressive's.
    let wav = tone(1_600, 0.1);
    let mut framer = Framer::with_params(Threshold { limit: 0 }, Some(Mode::Quality), 16_000, 10, 0)?;

    assert!(framer.process(&wav, true)?.decisions.iter().all(|&s| s));

    framer.set_mode(Mode::VeryAggressive)?;
    assert!(framer.process(&wav, true)?.decisions.iter().all(|&s| !s));
    Ok(())
}

#[test]
fn unsupported_config_is_rejected() {
    let err = Framer::with_params(Alternating::default(), None, 44_100, 20, 200)
        .err()
        .expect("44.1 kHz is unsupported");
    assert!(matches!(err, Error::Config(_)));

    let err = Framer::with_params(Alternating::default(), None, 16_000, 15, 200)
        .err()
        .expect("15 ms is unsupported");
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn pcm_boundaries_hit_i16_extremes() {
    assert_eq!(to_pcm16(&[-1.0]), to_pcm16(&[-1.0]));
    assert_eq!(pcm16_to_i16(&to_pcm16(&[-1.0])), vec![i16::MIN]);
    assert_eq!(pcm16_to_i16(&to_pcm16(&[1.0])), vec![i16::MAX]);
    assert_eq!(pcm16_to_i16(&to_pcm16(&[2.0, -2.0])), vec![i16::MAX, i16::MIN]);
}

#[test]
fn two_call_streaming_by_reprepending_the_remainder() -> Result<()> {
    let wav = tone(2_000, 0.3);
    let (first, second) = wav.split_at(700);

    let mut whole = framer_16k_20ms();
    let expected = whole.process(&wav, true)?;

    let mut framer = framer_16k_20ms();
    let a = framer.process(first, true)?;
    assert_eq!(a.decisions.len(), 2);
    assert_eq!(a.remainder, 60);

    let mut next = first[first.len() - a.remainder..].to_vec();
    next.extend_from_slice(second);
    let b = framer.process(&next, true)?;

    let mut got = a.decisions;
    got.extend(b.decisions);
    assert_eq!(got, expected.decisions);
    assert_eq!(b.remainder, expected.remainder);
    Ok(())
}

#[test]
fn stream_adapter_matches_manual_reprepend() -> Result<()> {
    let wav = tone(2_000, 0.3);

    let mut stream = FramerStream::new(framer_16k_20ms());
    let mut got = stream.push(&wav[..700])?;
    got.extend(stream.push(&wav[700..])?);
    assert_eq!(stream.pending(), 2_000 % 320);
    got.extend(stream.flush()?);

    let mut whole = framer_16k_20ms();
    assert_eq!(got, whole.process(&wav, false)?.decisions);
    Ok(())
}

#[test]
fn min_frames_is_reported_but_not_applied() -> Result<()> {
    let mut framer = Framer::with_params(Alternating::default(), None, 16_000, 20, 60)?;
    assert_eq!(framer.min_frames(), 3);

    let out = framer.process(&tone(320 * 4, 0.3), true)?;
    assert_eq!(out.decisions, vec![true, false, true, false]);
    assert!(speech_runs(&out.decisions, framer.min_frames()).is_empty());
    Ok(())
}
