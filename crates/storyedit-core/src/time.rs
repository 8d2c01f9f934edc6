//! Reel timing: trim ranges and playback speed.
//!
//! Times are plain seconds. A reel is short enough that float seconds never
//! accumulate meaningful error, and the host's sliders deliver `f64` anyway.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ValidationError};

/// The sub-interval of a video used in the final reel.
///
/// Always satisfies `0 <= start < end <= duration` for the media it was
/// validated against. Built with [`TrimRange::new`] or [`TrimRange::full`];
/// deserializing checks the ordering, and the media bound is re-checked
/// with [`TrimRange::fits`] wherever the media is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrim")]
pub struct TrimRange {
    start: f64,
    end: f64,
}

#[derive(Deserialize)]
struct RawTrim {
    start: f64,
    end: f64,
}

impl TryFrom<RawTrim> for TrimRange {
    type Error = ValidationError;

    fn try_from(raw: RawTrim) -> Result<Self> {
        if ordered(raw.start, raw.end) {
            Ok(Self {
                start: raw.start,
                end: raw.end,
            })
        } else {
            Err(ValidationError::InvalidTrim {
                start: raw.start,
                end: raw.end,
                duration: f64::NAN,
            })
        }
    }
}

fn ordered(start: f64, end: f64) -> bool {
    start.is_finite() && end.is_finite() && start >= 0.0 && start < end
}

impl TrimRange {
    /// Validate `start..end` against a media duration.
    pub fn new(start: f64, end: f64, duration: f64) -> Result<Self> {
        let valid = ordered(start, end) && duration.is_finite() && end <= duration;
        if valid {
            Ok(Self { start, end })
        } else {
            Err(ValidationError::InvalidTrim {
                start,
                end,
                duration,
            })
        }
    }

    /// The whole clip.
    pub fn full(duration: f64) -> Result<Self> {
        Self::new(0.0, duration, duration)
    }

    #[inline]
    pub fn start(self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(self) -> f64 {
        self.end
    }

    /// Length of the trimmed interval in seconds.
    #[inline]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Re-check the range against a media duration.
    pub fn fits(self, duration: f64) -> bool {
        Self::new(self.start, self.end, duration).is_ok()
    }
}

/// Playback speed of a reel. Only the listed rates exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    Half,
    ThreeQuarter,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
}

impl PlaybackSpeed {
    /// Every speed, slowest first.
    pub const ALL: [Self; 6] = [
        Self::Half,
        Self::ThreeQuarter,
        Self::Normal,
        Self::OneAndQuarter,
        Self::OneAndHalf,
        Self::Double,
    ];

    /// The rate multiplier.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::ThreeQuarter => 0.75,
            Self::Normal => 1.0,
            Self::OneAndQuarter => 1.25,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        }
    }

    /// Output length of `seconds` of source played at this speed.
    pub fn output_duration(self, seconds: f64) -> f64 {
        seconds / self.factor()
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self> {
        // All factors are exact in binary, so equality is safe.
        Self::ALL
            .into_iter()
            .find(|s| s.factor() == value)
            .ok_or(ValidationError::InvalidSpeed(value))
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.factor()
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}
