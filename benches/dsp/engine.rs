//! Benchmarks for full engine blocks.

use std::hint::black_box;

use criterion::Criterion;
use metronome_dsp::{AudioProcessor, EngineConfig, Metronome, ParamKey, RENDER_QUANTUM};

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let mut block = [0.0f32; RENDER_QUANTUM];

    // Steady state - no messages waiting
    let (_metronome, mut engine) = Metronome::new(EngineConfig::new().playing(true));
    group.bench_function("render_block", |b| {
        b.iter(|| {
            engine.render_block(Some(black_box(&mut block[..])));
        })
    });

    // One parameter change drained per block
    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new().playing(true));
    let mut bpm = 60.0;
    group.bench_function("render_block_with_update", |b| {
        b.iter(|| {
            bpm = if bpm >= 300.0 { 60.0 } else { bpm + 1.0 };
            let _ = metronome.set_param(ParamKey::Bpm, bpm);
            engine.render_block(Some(black_box(&mut block[..])));
        })
    });

    group.finish();
}
