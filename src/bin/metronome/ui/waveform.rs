//! Output scope widget
//!
//! Draws the tapped output against a time axis in milliseconds, with the
//! click envelope outlined around it and a vertical marker wherever a beat
//! boundary falls inside the window. The outline and markers are placed by
//! walking back from the engine's latest beat phase, one sample per point.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use metronome_dsp::{dsp::ClickEnvelope, EngineStatus, ParameterSet};

/// What the scope needs to know about the engine besides the samples
pub struct ScopeContext<'a> {
    pub params: &'a ParameterSet,
    pub status: &'a EngineStatus,
    pub sample_rate: f32,
}

/// Render the most recent output samples
pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32], ctx: &ScopeContext) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL);

    let len = audio_buffer.len();
    let sample_period = 1.0 / ctx.sample_rate as f64;
    let window_ms = len as f64 * sample_period * 1000.0;

    // gain can reach +10 dB, so widen the view instead of clipping the trace
    let y_limit = audio_buffer
        .iter()
        .fold(ctx.params.gain.max(1.0), |acc, &x| acc.max(x.abs())) as f64;

    let time_ms = |i: usize| i as f64 * sample_period * 1000.0;

    let trace: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .map(|(i, &sample)| (time_ms(i), sample as f64))
        .collect();

    let phases = beat_phases(len, sample_period, ctx);

    let mut upper = Vec::new();
    let mut lower = Vec::new();
    let mut boundaries = Vec::new();
    if ctx.status.playing {
        let attack = ctx.params.attack as f64;
        let decay = ctx.params.decay as f64;
        let gain = ctx.params.gain as f64;

        let mut previous = None;
        for (i, &phase) in phases.iter().enumerate() {
            let level = ClickEnvelope::level_at(phase, sample_period, attack, decay) as f64;
            upper.push((time_ms(i), gain * level));
            lower.push((time_ms(i), -gain * level));

            if previous.is_some_and(|p| phase < p) {
                boundaries.push([(time_ms(i), -y_limit), (time_ms(i), y_limit)]);
            }
            previous = Some(phase);
        }
    }

    let mut datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&trace),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&upper),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&lower),
    ];
    datasets.extend(boundaries.iter().map(|line| {
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&line[..])
    }));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, window_ms])
                .labels([
                    Span::raw(format!("-{window_ms:.0} ms")),
                    Span::raw("now"),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-y_limit, y_limit])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

/// Beat phase of every sample in a window of `len`, oldest first, assuming the
/// newest sample was rendered at the status snapshot's phase.
fn beat_phases(len: usize, sample_period: f64, ctx: &ScopeContext) -> Vec<f64> {
    let interval = ctx.params.beat_interval() as f64;
    (0..len)
        .map(|i| {
            let back = (len - 1 - i) as f64 * sample_period;
            (ctx.status.beat_phase - back).rem_euclid(interval)
        })
        .collect()
}
