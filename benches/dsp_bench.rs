//! Benchmarks for the click engine.
//!
//! Run with: cargo bench
//!
//! The engine renders one 128-sample quantum per callback. At 48kHz that
//! quantum has a 2.67ms deadline; at 44.1kHz, 2.90ms. The primitives are
//! also measured at other block sizes to show per-sample cost.
//!
//! Benchmark groups:
//!   - dsp/*        Oscillator and envelope primitives
//!   - engine/*     Full block render, with and without queued messages

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_oscillator,
    dsp::bench_envelope,
    dsp::bench_engine,
);
criterion_main!(benches);
