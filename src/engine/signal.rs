use rtrb::{Consumer, Producer};

use crate::{
    channel::{ControlMessage, EngineStatus, MessageReceiver, StatusSender},
    dsp::{envelope::ClickEnvelope, oscillator::SineOscillator},
    engine::{config::EngineConfig, processor::AudioProcessor},
    params::ParameterSet,
    DEFAULT_SAMPLE_RATE, RENDER_QUANTUM,
};

/// Renders metronome clicks: `gain * envelope * sine`.
///
/// Parameters live inside the engine and are only changed by messages popped
/// from `R`. Messages are drained before every sample, so a change sent while
/// a block is being rendered can take effect inside that same block and is
/// always in effect by the next one.
pub struct SignalEngine<R = Consumer<ControlMessage>, S = Producer<EngineStatus>> {
    sample_rate: f32,
    sample_period: f64,
    params: ParameterSet,
    oscillator: SineOscillator,
    envelope: ClickEnvelope,
    rx: R,
    status: S,
    last_level: f32,
    blocks_rendered: u64,
}

impl<R: MessageReceiver, S: StatusSender> SignalEngine<R, S> {
    pub fn new(config: &EngineConfig, rx: R, status: S) -> Self {
        let sample_rate = if config.sample_rate.is_finite() && config.sample_rate > 0.0 {
            config.sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };

        let mut envelope = ClickEnvelope::new();
        envelope.set_playing(config.playing);

        Self {
            sample_rate,
            sample_period: 1.0 / sample_rate as f64,
            params: config.params.sanitized(),
            oscillator: SineOscillator::new(),
            envelope,
            rx,
            status,
            last_level: 0.0,
            blocks_rendered: 0,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Parameter values as last applied on the render side.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn is_playing(&self) -> bool {
        self.envelope.is_playing()
    }

    /// Seconds into the current beat.
    pub fn beat_phase(&self) -> f64 {
        self.envelope.phase()
    }

    pub fn blocks_rendered(&self) -> u64 {
        self.blocks_rendered
    }

    fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::SetPlaying(playing) => self.envelope.set_playing(playing),
            ControlMessage::SetParam { key, value } => self.params.apply_coerced(key, value),
        }
    }

    #[inline]
    fn drain_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            self.apply(msg);
        }
    }

    #[inline]
    fn next_sample(&mut self) -> f32 {
        self.drain_messages();

        let params = self.params;
        let tone = self.oscillator.next(params.frequency / self.sample_rate);
        let level = self.envelope.next(
            self.sample_period,
            params.attack as f64,
            params.decay as f64,
            60.0 / params.bpm as f64,
        );
        self.last_level = level;

        params.gain * level * tone
    }
}

impl<R: MessageReceiver, S: StatusSender> AudioProcessor for SignalEngine<R, S> {
    /// Fill up to [`RENDER_QUANTUM`] samples of `out`.
    ///
    /// Shorter buffers are filled completely; anything past the quantum is
    /// left untouched.
    fn render_block(&mut self, out: Option<&mut [f32]>) -> bool {
        let Some(out) = out else {
            return true;
        };

        let len = out.len().min(RENDER_QUANTUM);
        for sample in &mut out[..len] {
            *sample = self.next_sample();
        }

        self.blocks_rendered += 1;
        self.status.publish(EngineStatus {
            playing: self.envelope.is_playing(),
            beat_phase: self.envelope.phase(),
            envelope_level: self.last_level,
            blocks_rendered: self.blocks_rendered,
        });

        true
    }
}
