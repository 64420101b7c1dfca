//! Session-level benchmarks.
//!
//! These model what one click costs end to end: key lookup, frequency
//! resolution, synthesis and label building.

mod session;

pub use session::bench_session;
