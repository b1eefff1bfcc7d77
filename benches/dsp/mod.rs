//! Benchmarks for DSP primitives and the signal engine.

mod engine;
mod envelope;
mod oscillator;

pub use engine::bench_engine;
pub use envelope::bench_envelope;
pub use oscillator::bench_oscillator;
