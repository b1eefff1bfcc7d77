//! TUI module for metronome
//!
//! Shows the transport, the parameter values and a scope of the rendered
//! output. Every key press that changes a value goes straight through the
//! [`Metronome`] facade, so the engine always tracks what is on screen.

mod params;
mod transport;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use metronome_dsp::{
    dsp::{decibel_to_gain, gain_to_decibel},
    EngineStatus, Metronome, ParamKey,
};

use params::render_params;
use transport::{render_transport, AudioStats};
use waveform::{render_waveform, ScopeContext};

/// Audio visualization buffer size
pub const VIS_BUFFER_SIZE: usize = 1024;

/// Decibel range offered by the gain keys
const GAIN_DB_RANGE: (f32, f32) = (-40.0, 10.0);

/// Static facts about the open device
pub struct SessionInfo {
    pub device_name: String,
    pub sample_rate: f32,
    pub channels: usize,
}

/// UI application state
pub struct UiApp {
    metronome: Metronome,
    /// Ring buffer receiver for audio samples
    audio_rx: Consumer<f32>,
    /// Audio sample buffer for visualization
    audio_buffer: Vec<f32>,
    info: SessionInfo,
    status: EngineStatus,
    last_error: Option<String>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(metronome: Metronome, audio_rx: Consumer<f32>, info: SessionInfo) -> Self {
        Self {
            metronome,
            audio_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            info,
            status: EngineStatus::default(),
            last_error: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            if let Some(status) = self.metronome.poll_status() {
                self.status = status;
            }

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Pull new samples from the tap, keeping the last VIS_BUFFER_SIZE
    fn poll_audio(&mut self) {
        let available = self.audio_rx.slots();
        if available == 0 {
            return;
        }

        if let Ok(chunk) = self.audio_rx.read_chunk(available) {
            self.audio_buffer.extend(chunk);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                let result = self.metronome.toggle_playing().map(|_| ());
                self.record(result);
            }
            KeyCode::Up => self.nudge(ParamKey::Bpm, 1.0),
            KeyCode::Down => self.nudge(ParamKey::Bpm, -1.0),
            KeyCode::PageUp => self.nudge(ParamKey::Bpm, 10.0),
            KeyCode::PageDown => self.nudge(ParamKey::Bpm, -10.0),
            KeyCode::Right => self.nudge(ParamKey::Frequency, 10.0),
            KeyCode::Left => self.nudge(ParamKey::Frequency, -10.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.nudge_gain_db(1.0),
            KeyCode::Char('-') => self.nudge_gain_db(-1.0),
            KeyCode::Char('A') => self.nudge(ParamKey::Attack, 0.001),
            KeyCode::Char('a') => self.nudge(ParamKey::Attack, -0.001),
            KeyCode::Char('D') => self.nudge(ParamKey::Decay, 0.005),
            KeyCode::Char('d') => self.nudge(ParamKey::Decay, -0.005),
            _ => {}
        }
    }

    /// Step a parameter, stopping at its bounds
    fn nudge(&mut self, key: ParamKey, delta: f32) {
        let spec = key.spec();
        let current = self.metronome.params().get(key);
        let next = (current + delta).clamp(spec.min, spec.max);
        if next != current {
            let result = self.metronome.set_param(key, next);
            self.record(result);
        }
    }

    fn nudge_gain_db(&mut self, delta: f32) {
        let (min_db, max_db) = GAIN_DB_RANGE;
        let current = gain_to_decibel(self.metronome.params().gain).max(min_db);
        let next = (current + delta).clamp(min_db, max_db);

        // powf can land a hair outside the linear bounds at either end
        let spec = ParamKey::Gain.spec();
        let gain = decibel_to_gain(next).clamp(spec.min, spec.max);
        let result = self.metronome.set_param(ParamKey::Gain, gain);
        self.record(result);
    }

    fn record<E: std::fmt::Display>(&mut self, result: Result<(), E>) {
        self.last_error = result.err().map(|err| err.to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: transport, parameters, waveform, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Length(7), // Parameters
                Constraint::Min(8),    // Waveform
                Constraint::Length(1), // Help / error bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_transport(
            frame,
            chunks[0],
            &self.info,
            self.metronome.params(),
            &self.status,
            &stats,
        );
        render_params(frame, chunks[1], self.metronome.params());
        let scope = ScopeContext {
            params: self.metronome.params(),
            status: &self.status,
            sample_rate: self.info.sample_rate,
        };
        render_waveform(frame, chunks[2], &self.audio_buffer, &scope);

        let footer = match &self.last_error {
            Some(err) => Paragraph::new(format!(" {err}")).style(Style::default().fg(Color::Red)),
            None => Paragraph::new(
                " [Q] Quit  [Space] Play/Stop  [↑↓/PgUp/PgDn] BPM  [←→] Freq  [+/-] Gain  [a/A] Attack  [d/D] Decay",
            )
            .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(footer, chunks[3]);
    }
}
