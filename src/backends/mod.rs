//! Concrete [`crate::Classifier`] implementations.

#[cfg(feature = "webrtc")]
pub mod webrtc;
