//! Waveform plot

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use piano_scope::{dsp::TimeAxis, Waveform};

use super::TRACE;

/// Vertical headroom around the ±1 trace
const Y_LIMIT: f64 = 1.2;

/// Render the current waveform against time in milliseconds
pub fn render_waveform(frame: &mut Frame, area: Rect, waveform: &Waveform, axis: &TimeAxis) {
    let block = Block::default()
        .title(format!(" {} ", waveform.label()))
        .borders(Borders::ALL);

    let data = waveform.points(axis);
    let duration_ms = axis.duration() * 1000.0;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(TRACE))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time (ms)")
                .bounds([0.0, duration_ms])
                .labels(vec![
                    "0".to_string(),
                    format!("{:.0}", duration_ms / 2.0),
                    format!("{:.0}", duration_ms),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds([-Y_LIMIT, Y_LIMIT])
                .labels(vec!["-1.2", "0.0", "1.2"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
