use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classifier aggressiveness.
///
/// Higher modes are stricter about what counts as speech: fewer false positives, more missed
/// detections. The framer passes the mode through to the classifier untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Quality = 0,
    LowBitrate = 1,
    Aggressive = 2,
    VeryAggressive = 3,
}

impl Mode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Mode::Quality),
            1 => Ok(Mode::LowBitrate),
            2 => Ok(Mode::Aggressive),
            3 => Ok(Mode::VeryAggressive),
            other => Err(Error::config(format!("mode must be 0..=3, got {other}"))),
        }
    }
}
