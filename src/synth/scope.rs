use tracing::debug;

use crate::{
    config::ScopeConfig,
    dsp::{chord_wave, triangle_wave, TimeAxis},
    error::Result,
    keyboard::HeldNotes,
    pitch::frequency_from_global_index,
    synth::waveform::{WaveLabel, Waveform},
};

/// Turns keys into waveforms over a fixed time window.
///
/// The time axis is computed once here and shared by every render; the scope
/// itself holds no per-note state.
pub struct Scope {
    config: ScopeConfig,
    time_axis: TimeAxis,
}

impl Scope {
    pub fn new(config: ScopeConfig) -> Result<Self> {
        config.validate()?;
        let time_axis = TimeAxis::linspace(config.duration, config.sample_count());

        Ok(Self { config, time_axis })
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    /// Samples per rendered buffer
    pub fn sample_count(&self) -> usize {
        self.time_axis.len()
    }

    /// Resolve a key to Hz, enforcing the configured octave range.
    pub fn frequency(&self, global_index: usize, octave: u8) -> Result<f64> {
        self.config.octave_range.check(octave as i64)?;
        frequency_from_global_index(global_index, octave)
    }

    /// Momentary play: one triangle wave for one key.
    pub fn render_note(&self, global_index: usize, name: &str, octave: u8) -> Result<Waveform> {
        let freq = self.frequency(global_index, octave)?;
        debug!(key = global_index, octave, freq, "rendering note {}", name);

        let samples = triangle_wave(freq, &self.time_axis);
        Ok(Waveform::new(samples, WaveLabel::Note(name.to_string())))
    }

    /// Normalized chord of every held key, or silence when nothing is held.
    pub fn render_held(&self, held: &HeldNotes, octave: u8) -> Result<Waveform> {
        if held.is_empty() {
            return Ok(Waveform::silence(self.sample_count()));
        }

        let frequencies = held
            .iter()
            .map(|(index, _)| self.frequency(index, octave))
            .collect::<Result<Vec<f64>>>()?;
        debug!(octave, ?frequencies, "rendering chord");

        let samples = chord_wave(&frequencies, &self.time_axis);
        Ok(Waveform::new(samples, WaveLabel::Chord(held.names())))
    }
}
