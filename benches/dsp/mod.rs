//! Benchmarks for synthesis primitives.

mod mix;
mod oscillator;

pub use mix::bench_mix;
pub use oscillator::bench_oscillator;
