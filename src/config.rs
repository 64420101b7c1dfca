//! Scope configuration.
//!
//! The defaults reproduce the classic 50 ms window at CD sample rate: 2205
//! samples per waveform, octaves 0 through 8, starting on octave 4.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopeError};
use crate::pitch::{MAX_OCTAVE, MIN_OCTAVE};

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_DURATION: f64 = 0.05;
pub const DEFAULT_OCTAVE: u8 = 4;

/// Inclusive range of octaves the user may select.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctaveRange {
    pub min: u8,
    pub max: u8,
}

impl OctaveRange {
    pub const FULL: OctaveRange = OctaveRange {
        min: MIN_OCTAVE,
        max: MAX_OCTAVE,
    };

    pub fn contains(&self, octave: u8) -> bool {
        (self.min..=self.max).contains(&octave)
    }

    /// Check `octave` against the range, reporting it as an invalid argument
    pub fn check(&self, octave: i64) -> Result<u8> {
        match u8::try_from(octave) {
            Ok(o) if self.contains(o) => Ok(o),
            _ => Err(ScopeError::OctaveOutOfRange {
                octave,
                min: self.min,
                max: self.max,
            }),
        }
    }
}

impl Default for OctaveRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Length of the plotted window in seconds
    pub duration: f64,
    pub octave_range: OctaveRange,
    /// Octave selected at start-up
    pub default_octave: u8,
}

impl ScopeConfig {
    /// Number of samples in every rendered buffer: `round(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration).round() as usize
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_default_octave(mut self, octave: u8) -> Self {
        self.default_octave = octave;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(ScopeError::InvalidConfig(
                "sample rate must be positive".into(),
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ScopeError::InvalidConfig(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        if self.sample_count() == 0 {
            return Err(ScopeError::InvalidConfig(format!(
                "{} Hz for {} s yields no samples",
                self.sample_rate, self.duration
            )));
        }
        let range = self.octave_range;
        if range.min > range.max || range.min < MIN_OCTAVE || range.max > MAX_OCTAVE {
            return Err(ScopeError::InvalidConfig(format!(
                "octave range {}..={} must lie within {}..={}",
                range.min, range.max, MIN_OCTAVE, MAX_OCTAVE
            )));
        }
        range.check(self.default_octave as i64)?;
        Ok(())
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            octave_range: OctaveRange::FULL,
            default_octave: DEFAULT_OCTAVE,
        }
    }
}
