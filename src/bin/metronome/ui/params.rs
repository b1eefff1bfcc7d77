//! Parameter table widget

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use metronome_dsp::{dsp::gain_to_decibel, ParamKey, ParameterSet};

/// Human-readable value with its unit
fn format_value(key: ParamKey, value: f32) -> String {
    match key {
        ParamKey::Bpm => format!("{value:.0} bpm"),
        ParamKey::Gain if value == 0.0 => "muted".to_owned(),
        ParamKey::Gain => format!("{:+.1} dB", gain_to_decibel(value)),
        ParamKey::Frequency => format!("{value:.0} Hz"),
        ParamKey::Attack | ParamKey::Decay => format!("{:.1} ms", value * 1000.0),
    }
}

/// Render current values next to their bounds
pub fn render_params(frame: &mut Frame, area: Rect, params: &ParameterSet) {
    let rows = ParamKey::ALL.into_iter().map(|key| {
        let spec = key.spec();
        Row::new(vec![
            key.name().to_owned(),
            format_value(key, params.get(key)),
            format!("{} … {}", format_value(key, spec.min), format_value(key, spec.max)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["param", "value", "range"])
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(" Parameters ").borders(Borders::ALL));

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_units() {
        assert_eq!(format_value(ParamKey::Bpm, 140.0), "140 bpm");
        assert_eq!(format_value(ParamKey::Gain, 1.0), "+0.0 dB");
        assert_eq!(format_value(ParamKey::Gain, 0.0), "muted");
        assert_eq!(format_value(ParamKey::Attack, 0.005), "5.0 ms");
        assert_eq!(format_value(ParamKey::Frequency, 880.0), "880 Hz");
    }
}
