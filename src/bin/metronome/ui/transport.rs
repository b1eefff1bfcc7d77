//! Transport bar widget - shows BPM, play state, beat pulse and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use metronome_dsp::{EngineStatus, ParameterSet};

use super::SessionInfo;

/// Envelope level above which the beat lamp is lit
const PULSE_THRESHOLD: f32 = 0.05;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the transport bar
pub fn render_transport(
    frame: &mut Frame,
    area: Rect,
    info: &SessionInfo,
    params: &ParameterSet,
    status: &EngineStatus,
    audio_stats: &AudioStats,
) {
    let block = Block::default().title(" metronome ").borders(Borders::ALL);

    let play_symbol = if status.playing { "▶" } else { "■" };
    let play_state_str = if status.playing { "Playing" } else { "Stopped" };
    let lamp = if status.envelope_level > PULSE_THRESHOLD { "●" } else { "○" };

    // progress through the current beat, 0-100%
    let beat_progress = (status.beat_phase / params.beat_interval() as f64 * 100.0).clamp(0.0, 100.0);

    let sample_rate_khz = info.sample_rate / 1000.0;

    let line = Line::from(vec![
        Span::styled(
            format!(" BPM: {:.0}  ", params.bpm),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{} {}  ", play_symbol, play_state_str),
            Style::default().fg(if status.playing {
                Color::Green
            } else {
                Color::Yellow
            }),
        ),
        Span::styled(format!("{lamp} "), Style::default().fg(Color::LightRed)),
        Span::styled(
            format!("beat {:>3.0}%  ", beat_progress),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{} ({:.1}kHz, {}ch)  ", info.device_name, sample_rate_khz, info.channels),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", audio_stats.peak, audio_stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
