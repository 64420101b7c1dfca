//! Spectrum panel
//!
//! FFT of the plotted window on log-spaced bins, so the odd harmonics of the
//! triangle (and the partials of a chord) show up next to the waveform.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use super::TRACE;

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 48;
/// Floor for silent bins
const MIN_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    sample_rate: f64,
    /// Hann window coefficients
    window: Vec<f64>,
    /// FFT bin index for each displayed frequency
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex<f64>>,
    /// (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
    /// Strongest non-DC bin of the last update
    dominant: Option<f64>,
}

impl SpectrumAnalyzer {
    pub fn new(buffer_len: usize, sample_rate: f64) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        // Hann window - reduces spectral leakage
        let window: Vec<f64> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f64;
                    0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        // Log-spaced frequency bins (20 Hz to Nyquist)
        let max_freq = (sample_rate / 2.0).clamp(1.0, 20_000.0);
        let min_freq = 20.0f64.min(max_freq);
        let ratio = max_freq / min_freq;
        let half = (buffer_len / 2).max(1);

        let (freqs, bin_indices): (Vec<f64>, Vec<usize>) = (0..SPECTRUM_BINS)
            .map(|i| {
                let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
                let freq = min_freq * ratio.powf(t);
                let index = (freq * buffer_len as f64 / sample_rate).round() as usize;
                (freq, index.min(half - 1))
            })
            .unzip();

        Self {
            sample_rate,
            window,
            bin_indices,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            spectrum: freqs.into_iter().map(|f| (f, MIN_DB)).collect(),
            dominant: None,
        }
    }

    /// Recompute from a new buffer; buffers of the wrong length are ignored.
    pub fn update(&mut self, buffer: &[f64]) {
        if buffer.len() != self.window.len() || buffer.is_empty() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let half = (self.scratch.len() / 2).max(1);
        let power = |c: &Complex<f64>| c.re * c.re + c.im * c.im;

        for ((_, magnitude_db), &idx) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            let p = power(&self.scratch[idx.min(half - 1)]);
            *magnitude_db = if p > 1e-20 {
                (10.0 * p.log10()).max(MIN_DB)
            } else {
                MIN_DB
            };
        }

        let n = self.scratch.len() as f64;
        self.dominant = self.scratch[1..half]
            .iter()
            .enumerate()
            .map(|(i, c)| (i + 1, power(c)))
            .filter(|&(_, p)| p > 1e-12)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i as f64 * self.sample_rate / n);
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    /// Frequency of the loudest bin, None for silence
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.dominant
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(TRACE))
        .data(spectrum);

    let max_freq = spectrum
        .iter()
        .map(|(f, _)| *f)
        .fold(0.0, f64::max)
        .max(1.0);
    let max_db = spectrum.iter().map(|(_, db)| *db).fold(MIN_DB, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Hz")
                .bounds([0.0, max_freq])
                .labels(vec!["0".to_string(), format!("{:.0}", max_freq)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([MIN_DB, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use piano_scope::dsp::{triangle_wave, TimeAxis};

    #[test]
    fn finds_the_fundamental() {
        let axis = TimeAxis::linspace(0.05, 2205);
        let wave = triangle_wave(440.0, &axis);
        let mut analyzer = SpectrumAnalyzer::new(2205, 44_100.0);
        analyzer.update(&wave);
        // bins are 20 Hz wide at this window length
        let dominant = analyzer.dominant_frequency().unwrap();
        assert!((dominant - 440.0).abs() <= 20.0, "got {dominant}");
    }

    #[test]
    fn silence_has_no_peak() {
        let mut analyzer = SpectrumAnalyzer::new(2205, 44_100.0);
        analyzer.update(&vec![0.0; 2205]);
        assert_eq!(analyzer.dominant_frequency(), None);
        assert!(analyzer.data().iter().all(|&(_, db)| db == MIN_DB));
    }

    #[test]
    fn wrong_length_is_ignored() {
        let mut analyzer = SpectrumAnalyzer::new(16, 44_100.0);
        analyzer.update(&[1.0; 8]);
        assert_eq!(analyzer.dominant_frequency(), None);
        assert_eq!(analyzer.data().len(), SPECTRUM_BINS);
    }
}
