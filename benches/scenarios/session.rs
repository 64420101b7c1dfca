//! Benchmarks for play / hold / octave change through a Session.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use piano_scope::{KeyId, ScopeConfig, Session};

use crate::WINDOW_SIZES;

pub fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/session");

    for &size in WINDOW_SIZES {
        let config = ScopeConfig::default().with_duration(size as f64 / 44_100.0);

        // === Momentary play ===
        let mut session = Session::new(config).expect("valid config");
        group.bench_with_input(BenchmarkId::new("play", size), &size, |b, _| {
            b.iter(|| {
                session.play(black_box(KeyId(9))).expect("known key");
            })
        });

        // === Toggle one key on top of a held triad ===
        let mut session = Session::new(config).expect("valid config");
        for key in [0, 4, 7] {
            session.toggle_hold(KeyId(key)).expect("known key");
        }
        group.bench_with_input(BenchmarkId::new("toggle_hold", size), &size, |b, _| {
            b.iter(|| {
                session.toggle_hold(black_box(KeyId(11))).expect("known key");
            })
        });

        // === Octave change re-renders the held chord ===
        let mut octave = 4;
        group.bench_with_input(BenchmarkId::new("set_octave", size), &size, |b, _| {
            b.iter(|| {
                octave = if octave == 4 { 5 } else { 4 };
                session.set_octave(black_box(octave)).expect("in range");
            })
        });
    }

    group.finish();
}
