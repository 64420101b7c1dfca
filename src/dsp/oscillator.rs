/*
Phase-Folding Triangle
======================

The triangle is computed directly from absolute time, with no oscillator
state carried between samples:

    phase  = t × frequency                 (cycles elapsed)
    offset = phase - floor(phase + 0.5)    (distance to nearest whole cycle,
                                            in [-0.5, 0.5))
    sample = 2 × |2 × offset| - 1

  phase   0.0   0.25   0.5   0.75   1.0
  offset  0.0   0.25  -0.5  -0.25   0.0
  sample -1.0   0.0    1.0   0.0   -1.0

Properties that follow from the formula:
  - starts at -1 when t = 0
  - period is exactly 1/frequency
  - range is [-1, +1] with zero DC offset
  - continuous (no jump at the fold), so evaluating at t and t + 1/f agrees
    up to rounding
*/

/// One triangle sample at time `t` (seconds).
#[inline]
pub fn triangle_sample(frequency: f64, t: f64) -> f64 {
    let phase = t * frequency;
    2.0 * (2.0 * (phase - (phase + 0.5).floor())).abs() - 1.0
}

/// Triangle wave at `frequency` Hz evaluated at every time in `times`.
///
/// The result has the same length as `times`.
pub fn triangle_wave(frequency: f64, times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .map(|&t| triangle_sample(frequency, t))
        .collect()
}

/// Add a triangle wave into an existing buffer.
pub fn add_triangle(frequency: f64, times: &[f64], out: &mut [f64]) {
    debug_assert_eq!(times.len(), out.len());

    for (o, &t) in out.iter_mut().zip(times) {
        *o += triangle_sample(frequency, t);
    }
}
