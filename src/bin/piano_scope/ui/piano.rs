//! Piano keyboard widget - white keys first, black keys drawn over them

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use piano_scope::keyboard::{KeyRect, KeyRecord, Keyboard, KeyboardLayout};

use super::color;

pub fn render_piano(frame: &mut Frame, keyboard: &Keyboard, layout: &KeyboardLayout) {
    for (id, rect) in layout.white() {
        if let Ok(key) = keyboard.get(*id) {
            render_key(frame, key, to_rect(*rect));
        }
    }

    for (id, rect) in layout.black() {
        if let Ok(key) = keyboard.get(*id) {
            let area = to_rect(*rect);
            frame.render_widget(Clear, area);
            render_key(frame, key, area);
        }
    }
}

fn render_key(frame: &mut Frame, key: &KeyRecord, area: Rect) {
    let fill = color(key.fill());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray).bg(fill))
        .style(Style::default().bg(fill));

    // Label sits at the bottom of the key
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines = vec![Line::raw(""); inner_height.saturating_sub(1)];
    lines.push(Line::styled(
        key.name.clone(),
        Style::default()
            .fg(color(key.color.text()))
            .add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn to_rect(rect: KeyRect) -> Rect {
    Rect::new(rect.x, rect.y, rect.width, rect.height)
}
