//! Control-side handle for a running metronome.

use rtrb::Producer;
use tracing::{debug, warn};

use crate::{
    channel::{
        parameter_channel, status_channel, ControlMessage, ControlSender, EngineStatus,
        StatusReceiver,
    },
    dsp::conversion::decibel_to_gain,
    engine::{EngineConfig, SignalEngine},
    error::{ControlError, DeviceError},
    io::device::AudioSession,
    params::{ParamKey, ParameterSet},
};

/// The object a UI holds to drive the engine.
///
/// Every setter validates on this side of the channel. Rejected values are
/// logged and returned as errors; accepted ones are queued for the engine and
/// mirrored locally so [`Metronome::params`] always shows what the engine is
/// converging to.
pub struct Metronome {
    tx: ControlSender,
    status_rx: StatusReceiver,
    params: ParameterSet,
    playing: bool,
    last_status: Option<EngineStatus>,
}

impl Metronome {
    /// Build a facade and the engine it controls.
    ///
    /// The engine is returned unattached; hand it to whatever calls
    /// [`AudioProcessor::render_block`](crate::AudioProcessor::render_block).
    pub fn new(config: EngineConfig) -> (Self, SignalEngine) {
        let (tx, rx) = parameter_channel(config.queue_capacity);
        let (status_tx, status_rx) = status_channel(config.status_capacity);

        let engine = SignalEngine::new(&config, rx, status_tx);
        let metronome = Self {
            tx,
            status_rx,
            params: config.params.sanitized(),
            playing: config.playing,
            last_status: None,
        };

        (metronome, engine)
    }

    /// Open the default output device and start rendering into it.
    ///
    /// The engine runs at the device's sample rate regardless of
    /// `config.sample_rate`. Dropping the returned session stops the audio.
    /// Pass a `tap` to receive a copy of every rendered sample.
    pub fn start(
        config: EngineConfig,
        tap: Option<Producer<f32>>,
    ) -> Result<(Self, AudioSession), DeviceError> {
        AudioSession::start(config, tap)
    }

    pub fn set_playing(&mut self, playing: bool) -> Result<(), ControlError> {
        self.tx.send(ControlMessage::SetPlaying(playing))?;
        self.playing = playing;
        debug!(playing, "play state sent");
        Ok(())
    }

    /// Flip the play state and return the new one.
    pub fn toggle_playing(&mut self) -> Result<bool, ControlError> {
        let playing = !self.playing;
        self.set_playing(playing)?;
        Ok(playing)
    }

    pub fn set_param(&mut self, key: ParamKey, value: f32) -> Result<(), ControlError> {
        let value = key.validate(value).inspect_err(|err| {
            warn!(%key, value, %err, "rejected parameter");
        })?;

        self.tx.send(ControlMessage::SetParam { key, value })?;
        self.params.apply_coerced(key, value);
        debug!(%key, value, "parameter sent");
        Ok(())
    }

    /// Look up a parameter by its lower-case name and set it.
    pub fn set_named(&mut self, name: &str, value: f32) -> Result<(), ControlError> {
        let key = name.parse::<ParamKey>()?;
        self.set_param(key, value)
    }

    /// Set the output level in decibels.
    pub fn set_gain_db(&mut self, db: f32) -> Result<(), ControlError> {
        self.set_param(ParamKey::Gain, decibel_to_gain(db))
    }

    /// Send every parameter and the play state again.
    ///
    /// Useful after reconnecting a UI that kept its own copy of the values.
    pub fn resync(&mut self, params: ParameterSet, playing: bool) -> Result<(), ControlError> {
        for key in ParamKey::ALL {
            self.set_param(key, params.get(key))?;
        }
        self.set_playing(playing)
    }

    /// Accepted parameter values.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Play state as last requested.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Newest engine status, or the previous one if nothing new arrived.
    pub fn poll_status(&mut self) -> Option<EngineStatus> {
        if let Some(status) = self.status_rx.latest() {
            self.last_status = Some(status);
        }
        self.last_status
    }

    /// True once the engine has been dropped.
    pub fn is_detached(&self) -> bool {
        self.tx.is_abandoned()
    }
}
