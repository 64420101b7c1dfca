//! Benchmarks for triangle waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use piano_scope::dsp::{triangle_wave, TimeAxis};

use crate::WINDOW_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in WINDOW_SIZES {
        let axis = TimeAxis::linspace(size as f64 / 44_100.0, size);

        // Middle C - a dozen cycles per 50 ms window
        group.bench_with_input(BenchmarkId::new("triangle_c4", size), &size, |b, _| {
            b.iter(|| triangle_wave(black_box(261.6), black_box(&axis)))
        });

        // Top of the keyboard - floor() runs on large phases
        group.bench_with_input(BenchmarkId::new("triangle_b9", size), &size, |b, _| {
            b.iter(|| triangle_wave(black_box(15_805.4), black_box(&axis)))
        });
    }

    group.finish();
}
