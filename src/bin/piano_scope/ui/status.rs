//! Status bar - octave entry, held notes, window size and signal levels

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use piano_scope::Session;

use crate::app::OctaveEntry;

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    entry: &OctaveEntry,
    dominant: Option<f64>,
    notice: Option<&str>,
) {
    let block = Block::default()
        .title(" piano_scope ")
        .borders(Borders::ALL);

    let config = session.scope().config();
    let stats = session.waveform().stats();

    let entry_style = if entry.editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let cursor = if entry.editing { "_" } else { "" };

    let mut spans = vec![
        Span::styled(" Octave: ", Style::default().fg(Color::Cyan)),
        Span::styled(format!("[{}{}]", entry.text, cursor), entry_style),
        Span::raw("  "),
        Span::styled(
            format!("Held: {}  ", session.held().len()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(
                "{:.1}kHz  {} samples  ",
                config.sample_rate as f64 / 1000.0,
                session.waveform().len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}  ", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ];

    if let Some(freq) = dominant {
        spans.push(Span::styled(
            format!("~{:.0} Hz  ", freq),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(notice) = notice {
        spans.push(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
