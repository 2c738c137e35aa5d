//! `vadframe` — fixed-size PCM framing for narrowband voice activity detection.
//!
//! This crate provides:
//! - Float waveform to little-endian PCM16 conversion
//! - Frame segmentation with truncate-and-carry or cyclic padding of the unaligned tail
//! - Ordered per-frame speech decisions from a pluggable [`Classifier`]
//! - A streaming adapter that carries unconsumed samples between chunks
//!
//! The speech/non-speech decision itself comes from a [`Classifier`]. Enable the `webrtc`
//! feature for the bundled WebRTC backend, or implement the trait for your own engine.

// Core framing API (most consumers should start here).
pub mod config;
pub mod framer;
pub mod mode;
pub mod stream;

// Classifier seam and concrete engines.
pub mod backends;
pub mod classifier;

// Sample conversion and decision post-processing.
pub mod pcm;
pub mod speech;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use classifier::{Classifier, valid_rate_and_frame_length};
pub use config::{FrameGeometry, FramerConfig};
pub use error::{Error, Result};
pub use framer::{Decisions, Framer};
pub use mode::Mode;
pub use stream::FramerStream;
