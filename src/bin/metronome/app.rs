//! MetronomeApp - opens the audio device and hands control to the TUI

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use rtrb::RingBuffer;
use tracing::info;

use metronome_dsp::{EngineConfig, Metronome};

use super::ui::{SessionInfo, UiApp, VIS_BUFFER_SIZE};

/// Main application builder
pub struct MetronomeApp {
    config: EngineConfig,
}

impl MetronomeApp {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Start audio, run the UI until the user quits, then shut audio down.
    pub fn run(self) -> EyreResult<()> {
        // room for several UI frames of samples so the scope never starves
        let (tap_tx, tap_rx) = RingBuffer::<f32>::new(VIS_BUFFER_SIZE * 8);

        let (metronome, session) = Metronome::start(self.config, Some(tap_tx))
            .wrap_err("failed to start audio output")?;

        let info = SessionInfo {
            device_name: session.device_name().to_owned(),
            sample_rate: session.sample_rate(),
            channels: session.channels(),
        };
        info!(device = %info.device_name, "audio running");

        let mut terminal = ratatui::init();
        let result = UiApp::new(metronome, tap_rx, info).run(&mut terminal);
        ratatui::restore();

        drop(session);
        result
    }
}
