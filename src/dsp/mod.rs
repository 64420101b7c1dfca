//! Waveform synthesis primitives.
//!
//! Everything here is a pure function of its inputs: the same frequencies and
//! time axis always produce the same samples. Buffers are `f64` end to end.

/// Chord summing and peak normalization.
pub mod mix;
/// Phase-folding triangle oscillator.
pub mod oscillator;
/// Peak/RMS/DC of a rendered buffer.
pub mod stats;
/// Shared sample-time axis.
pub mod time_axis;

pub use mix::{chord_wave, normalize, peak};
pub use oscillator::triangle_wave;
pub use stats::SignalStats;
pub use time_axis::TimeAxis;
