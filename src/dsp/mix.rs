//! Chord summing and peak normalization.

/*
Chords
======

A chord is the plain sum of one triangle per held frequency:

    chord[i] = Σ triangle(f, t[i])    for every held f

Summing N full-scale waves can reach ±N, so the result is rescaled by its own
peak:

    peak     = max |chord[i]|
    chord[i] = chord[i] / peak        (only when peak > 0)

After normalization the loudest sample is exactly ±1.0 (x / x is exact in
IEEE arithmetic). A single triangle already peaks at 1.0 (it starts at -1),
so normalizing it changes nothing. A buffer that sums to silence everywhere
is left as zeros rather than divided by zero.

Summation order only matters up to floating-point rounding.
*/

use crate::dsp::oscillator::add_triangle;

/// Largest absolute sample, 0.0 for an empty buffer.
#[inline]
pub fn peak(buffer: &[f64]) -> f64 {
    buffer.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
}

/// Scale `buffer` so its peak absolute value is 1.0.
///
/// Returns the peak found before scaling; a silent buffer is left untouched.
pub fn normalize(buffer: &mut [f64]) -> f64 {
    let peak = peak(buffer);
    if peak > 0.0 {
        for sample in buffer.iter_mut() {
            *sample /= peak;
        }
    }
    peak
}

/// Normalized sum of triangle waves, one per frequency.
///
/// No frequencies yields silence of the same length as `times`.
pub fn chord_wave(frequencies: &[f64], times: &[f64]) -> Vec<f64> {
    let mut wave = vec![0.0; times.len()];
    if frequencies.is_empty() {
        return wave;
    }

    for &freq in frequencies {
        add_triangle(freq, times, &mut wave);
    }
    normalize(&mut wave);
    wave
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{oscillator::triangle_wave, TimeAxis};

    fn axis() -> TimeAxis {
        TimeAxis::linspace(0.05, 2205)
    }

    #[test]
    fn no_frequencies_is_silence() {
        let axis = axis();
        let wave = chord_wave(&[], &axis);
        assert_eq!(wave.len(), axis.len());
        assert!(wave.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn single_note_is_unchanged() {
        let axis = axis();
        for &freq in &[16.35, 261.6, 440.0] {
            let chord = chord_wave(&[freq], &axis);
            let single = triangle_wave(freq, &axis);
            assert_eq!(chord.len(), single.len());
            for (a, b) in chord.iter().zip(&single) {
                assert!((a - b).abs() < 1e-12, "{freq} Hz: {a} vs {b}");
            }
        }
    }

    #[test]
    fn two_notes_peak_at_one() {
        let axis = axis();
        let wave = chord_wave(&[261.6, 329.6], &axis);
        assert_eq!(wave.len(), 2205);
        assert_eq!(peak(&wave), 1.0);
    }

    #[test]
    fn unison_normalizes_back_to_single() {
        let axis = axis();
        let single = triangle_wave(440.0, &axis);
        let doubled = chord_wave(&[440.0, 440.0], &axis);
        for (a, b) in single.iter().zip(&doubled) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn order_only_affects_rounding() {
        let axis = axis();
        let a = chord_wave(&[261.6, 329.6, 392.0], &axis);
        let b = chord_wave(&[392.0, 261.6, 329.6], &axis);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_leaves_silence_alone() {
        let mut silent = vec![0.0; 8];
        assert_eq!(normalize(&mut silent), 0.0);
        assert!(silent.iter().all(|&s| s == 0.0));

        let mut loud = vec![0.5, -2.0, 1.0];
        assert_eq!(normalize(&mut loud), 2.0);
        assert_eq!(loud, vec![0.25, -1.0, 0.5]);
    }

    #[test]
    fn empty_time_axis() {
        assert!(chord_wave(&[440.0], &[]).is_empty());
    }
}
