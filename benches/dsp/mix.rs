//! Benchmarks for chord summing and normalization.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use piano_scope::dsp::{chord_wave, TimeAxis};

use crate::WINDOW_SIZES;

/// C major triad, then the same with a seventh and a ninth
const TRIAD: &[f64] = &[261.6, 329.6, 392.0];
const NINTH: &[f64] = &[261.6, 329.6, 392.0, 493.9, 587.3];

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in WINDOW_SIZES {
        let axis = TimeAxis::linspace(size as f64 / 44_100.0, size);

        group.bench_with_input(BenchmarkId::new("chord_3", size), &size, |b, _| {
            b.iter(|| chord_wave(black_box(TRIAD), black_box(&axis)))
        });

        group.bench_with_input(BenchmarkId::new("chord_5", size), &size, |b, _| {
            b.iter(|| chord_wave(black_box(NINTH), black_box(&axis)))
        });

        // Early return path
        group.bench_with_input(BenchmarkId::new("silence", size), &size, |b, _| {
            b.iter(|| chord_wave(black_box(&[] as &[f64]), black_box(&axis)))
        });
    }

    group.finish();
}
