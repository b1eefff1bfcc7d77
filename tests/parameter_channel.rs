use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

use metronome_dsp::{
    AudioProcessor, ControlError, EngineConfig, Metronome, ParamKey, RENDER_QUANTUM,
};

#[test]
fn every_update_arrives_in_order_across_threads() {
    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new().queue_capacity(8));
    let done = Arc::new(AtomicBool::new(false));

    let render_done = done.clone();
    let render = thread::spawn(move || {
        let mut block = [0.0f32; RENDER_QUANTUM];
        let mut last_bpm = engine.params().bpm;
        let mut blocks = 0u64;

        loop {
            let finished = render_done.load(Ordering::Acquire);
            engine.render_block(Some(&mut block[..]));
            blocks += 1;

            let bpm = engine.params().bpm;
            // starts at the 140 default, then must only climb
            assert!(
                bpm >= last_bpm || last_bpm == 140.0,
                "bpm went back from {last_bpm} to {bpm}"
            );
            last_bpm = bpm;

            if finished {
                break;
            }
            thread::yield_now();
        }
        (engine, blocks)
    });

    // a small ring forces the control side to see backpressure
    for bpm in 1..=320 {
        loop {
            match metronome.set_param(ParamKey::Bpm, bpm as f32) {
                Ok(()) => break,
                Err(ControlError::QueueFull(_)) => thread::yield_now(),
                Err(err) => panic!("unexpected error: {err}"),
            }
        }
    }
    done.store(true, Ordering::Release);

    let (engine, blocks) = render.join().unwrap();
    assert!(blocks > 0);
    assert_eq!(engine.params().bpm, 320.0);
    assert_eq!(metronome.params().bpm, 320.0);
}

#[test]
fn message_sent_between_blocks_is_visible_in_next_block() {
    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new());
    let mut block = [0.0f32; RENDER_QUANTUM];

    engine.render_block(Some(&mut block[..]));
    assert!(block.iter().all(|&s| s == 0.0));

    metronome.set_playing(true).unwrap();
    metronome.set_param(ParamKey::Frequency, 2000.0).unwrap();

    engine.render_block(Some(&mut block[..]));
    assert!(engine.is_playing());
    assert_eq!(engine.params().frequency, 2000.0);
    assert!(block.iter().any(|&s| s != 0.0));
}

#[test]
fn nothing_is_lost_when_render_side_stalls() {
    let capacity = 16;
    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new().queue_capacity(capacity));

    for n in 0..capacity {
        metronome.set_param(ParamKey::Frequency, 100.0 + n as f32).unwrap();
    }
    assert!(matches!(
        metronome.set_param(ParamKey::Frequency, 999.0),
        Err(ControlError::QueueFull(_))
    ));

    // skipped blocks keep the queue untouched
    assert!(engine.render_block(None));
    assert!(matches!(
        metronome.set_playing(true),
        Err(ControlError::QueueFull(_))
    ));

    let mut block = [0.0f32; RENDER_QUANTUM];
    engine.render_block(Some(&mut block[..]));
    assert_eq!(engine.params().frequency, 100.0 + (capacity - 1) as f32);

    metronome.set_param(ParamKey::Frequency, 999.0).unwrap();
    engine.render_block(Some(&mut block[..]));
    assert_eq!(engine.params().frequency, 999.0);
}

#[test]
fn resync_pushes_every_parameter() {
    let (mut metronome, mut engine) = Metronome::new(EngineConfig::new());
    let mut params = *metronome.params();
    params.bpm = 72.0;
    params.attack = 0.01;
    params.decay = 0.2;

    metronome.resync(params, true).unwrap();
    let mut block = [0.0f32; RENDER_QUANTUM];
    engine.render_block(Some(&mut block[..]));

    assert_eq!(engine.params(), &params);
    assert!(engine.is_playing());
}
