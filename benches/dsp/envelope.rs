//! Benchmarks for the click envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use metronome_dsp::dsp::envelope::ClickEnvelope;

use crate::BLOCK_SIZES;

const DELTA: f64 = 1.0 / 48_000.0;
const BEAT: f64 = 60.0 / 140.0;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Playing - ramps and silence, phase wraps every beat
        let mut env = ClickEnvelope::new();
        env.set_playing(true);
        group.bench_with_input(BenchmarkId::new("playing", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = env.next(black_box(DELTA), 0.005, 0.05, BEAT);
                }
            })
        });

        // Resting - gate low, early return every sample
        let mut env = ClickEnvelope::new();
        group.bench_with_input(BenchmarkId::new("resting", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = env.next(black_box(DELTA), 0.005, 0.05, BEAT);
                }
            })
        });
    }

    group.finish();
}
