use std::error::Error as StdError;

use thiserror::Error;

/// vadframe's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// vadframe's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Unsupported framing configuration (sample rate, frame duration, mode).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The classifier refused the frame geometry or failed to classify a frame.
    #[error("classifier error: {0}")]
    Classifier(String),

    /// A waveform sample that cannot be converted to PCM16.
    #[error("sample {index} is not finite ({value})")]
    InvalidSample { index: usize, value: f32 },

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn classifier(message: impl Into<String>) -> Self {
        Self::Classifier(message.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
