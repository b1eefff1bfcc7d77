/// Render a few seconds of clicks without an audio device and report what came out.
use metronome_dsp::{AudioProcessor, EngineConfig, Metronome, ParamKey, RENDER_QUANTUM};

fn main() {
    println!("=== Offline Click Demo ===\n");

    let sample_rate = 48_000.0;
    let seconds = 4.0;

    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new().sample_rate(sample_rate));
    for (key, value) in [
        (ParamKey::Bpm, 120.0),
        (ParamKey::Frequency, 1500.0),
        (ParamKey::Decay, 0.03),
    ] {
        if let Err(err) = metronome.set_param(key, value) {
            eprintln!("could not set {key}: {err}");
        }
    }
    if let Err(err) = metronome.set_playing(true) {
        eprintln!("could not start: {err}");
        return;
    }

    let blocks = (seconds * sample_rate) as usize / RENDER_QUANTUM;
    let mut block = [0.0f32; RENDER_QUANTUM];
    let mut output = Vec::with_capacity(blocks * RENDER_QUANTUM);
    for _ in 0..blocks {
        engine.render_block(Some(&mut block[..]));
        output.extend_from_slice(&block);
    }

    // a click starts wherever output resumes after a run of silence
    let mut clicks = Vec::new();
    let mut silent_run = usize::MAX;
    for (n, &sample) in output.iter().enumerate() {
        if sample != 0.0 {
            if silent_run > RENDER_QUANTUM {
                clicks.push(n);
            }
            silent_run = 0;
        } else {
            silent_run = silent_run.saturating_add(1);
        }
    }

    let peak = output.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    println!("Rendered {} samples ({seconds}s at {sample_rate}Hz)", output.len());
    println!("Peak amplitude: {:.3}", peak);
    println!("Clicks: {}", clicks.len());
    for pair in clicks.windows(2) {
        let gap = (pair[1] - pair[0]) as f32 / sample_rate;
        println!("  gap {:.4}s", gap);
    }
}
