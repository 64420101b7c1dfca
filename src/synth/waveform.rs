use std::fmt;

use crate::dsp::{SignalStats, TimeAxis};

/// What a waveform is a picture of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveLabel {
    /// Nothing held
    Silence,
    /// A single key, e.g. "C4"
    Note(String),
    /// Held keys in ascending key order
    Chord(Vec<String>),
}

impl WaveLabel {
    /// Note names joined with ", " ("C4, E4"); empty for silence
    pub fn names(&self) -> String {
        match self {
            WaveLabel::Silence => String::new(),
            WaveLabel::Note(name) => name.clone(),
            WaveLabel::Chord(names) => names.join(", "),
        }
    }
}

impl fmt::Display for WaveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveLabel::Silence => write!(f, "No notes"),
            WaveLabel::Note(name) => write!(f, "Note: {}", name),
            WaveLabel::Chord(names) if names.len() == 1 => write!(f, "Note: {}", names[0]),
            WaveLabel::Chord(names) => write!(f, "Chord: {}", names.join(", ")),
        }
    }
}

/// A rendered sample buffer and the label to plot it under.
///
/// Every synthesis call produces a fresh one; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    label: WaveLabel,
}

impl Waveform {
    pub fn new(samples: Vec<f64>, label: WaveLabel) -> Self {
        Self { samples, label }
    }

    /// All-zero buffer of `len` samples labelled "No notes"
    pub fn silence(len: usize) -> Self {
        Self::new(vec![0.0; len], WaveLabel::Silence)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn label(&self) -> &WaveLabel {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn stats(&self) -> SignalStats {
        SignalStats::from_buffer(&self.samples)
    }

    /// (milliseconds, amplitude) pairs for a line chart.
    pub fn points(&self, axis: &TimeAxis) -> Vec<(f64, f64)> {
        axis.millis().zip(self.samples.iter().copied()).collect()
    }
}
