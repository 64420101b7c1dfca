//! Event loop: terminal input -> message queue -> session -> redraw

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer, PushError, RingBuffer};
use tracing::warn;

use piano_scope::{
    keyboard::{KeyRect, KeyboardLayout},
    pitch::parse_octave,
    KeyId, PianoMessage, Session,
};

use crate::ui::{
    piano::render_piano, spectrum::render_spectrum, spectrum::SpectrumAnalyzer,
    status::render_status, waveform::render_waveform,
};

const QUEUE_CAPACITY: usize = 64;
/// How long a played key stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// Computer keys that play piano keys 0..=16, left to right.
const PLAY_KEYS: [char; 17] = [
    'a', 'w', 's', 'e', 'd', 'f', 't', 'g', 'y', 'h', 'u', 'j', 'k', 'o', 'l', 'p', ';',
];
/// Shifted versions toggle hold.
const HOLD_KEYS: [char; 17] = [
    'A', 'W', 'S', 'E', 'D', 'F', 'T', 'G', 'Y', 'H', 'U', 'J', 'K', 'O', 'L', 'P', ':',
];

/// Octave text box. While not editing it mirrors the session's octave, so a
/// rejected entry falls back to the last valid value.
#[derive(Debug, Default)]
pub struct OctaveEntry {
    pub text: String,
    pub editing: bool,
}

impl OctaveEntry {
    /// A sign may only start an entry
    fn text_is_fresh(&self) -> bool {
        !self.editing || self.text.is_empty()
    }
}

pub struct App {
    session: Session,
    tx: Producer<PianoMessage>,
    rx: Consumer<PianoMessage>,
    entry: OctaveEntry,
    /// Cached until the piano area changes size
    layout: Option<KeyboardLayout>,
    spectrum: SpectrumAnalyzer,
    spectrum_revision: Option<u64>,
    pressed_at: Option<Instant>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let (tx, rx) = RingBuffer::<PianoMessage>::new(QUEUE_CAPACITY);
        let spectrum = SpectrumAnalyzer::new(
            session.scope().sample_count(),
            session.scope().config().sample_rate as f64,
        );
        let entry = OctaveEntry {
            text: session.octave().to_string(),
            editing: false,
        };

        Self {
            session,
            tx,
            rx,
            entry,
            layout: None,
            spectrum,
            spectrum_revision: None,
            pressed_at: None,
            notice: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.apply_messages();
            self.expire_press();
            self.refresh_spectrum();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking input, ~60fps
            if event::poll(Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(..) => self.layout = None,
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn apply_messages(&mut self) {
        self.session.drain(&mut self.rx);

        if let Some(err) = self.session.take_error() {
            self.notice = Some(err.to_string());
        }
        if !self.entry.editing {
            self.entry.text = self.session.octave().to_string();
        }
    }

    fn send(&mut self, message: PianoMessage) {
        if matches!(message, PianoMessage::Play { .. }) {
            self.pressed_at = Some(Instant::now());
        }

        match self.tx.push(message) {
            Ok(()) => {}
            Err(PushError::Full(pending)) => {
                // Make room without reordering: everything queued goes first
                self.apply_messages();
                if self.tx.push(pending).is_err() {
                    warn!(?pending, "message queue full, dropping");
                }
            }
        }
    }

    fn expire_press(&mut self) {
        if let Some(at) = self.pressed_at {
            if at.elapsed() >= PRESS_FLASH {
                self.pressed_at = None;
                self.send(PianoMessage::ReleasePressed);
            }
        }
    }

    fn refresh_spectrum(&mut self) {
        let revision = self.session.revision();
        if self.spectrum_revision != Some(revision) {
            self.spectrum.update(self.session.waveform().samples());
            self.spectrum_revision = Some(revision);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc if self.entry.editing => {
                self.entry.editing = false;
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if c.is_ascii_digit() || (c == '-' && self.entry.text_is_fresh()) =>
            {
                if !self.entry.editing {
                    self.entry.editing = true;
                    self.entry.text.clear();
                }
                self.entry.text.push(c);
            }
            KeyCode::Backspace if self.entry.editing => {
                self.entry.text.pop();
            }
            KeyCode::Enter if self.entry.editing => self.submit_octave(),
            KeyCode::Left => self.step_octave(-1),
            KeyCode::Right => self.step_octave(1),
            KeyCode::Char(c) => {
                if let Some(i) = PLAY_KEYS.iter().position(|&k| k == c) {
                    self.send(PianoMessage::Play { key: KeyId(i) });
                } else if let Some(i) = HOLD_KEYS.iter().position(|&k| k == c) {
                    self.send(PianoMessage::ToggleHold { key: KeyId(i) });
                }
            }
            _ => {}
        }
    }

    fn submit_octave(&mut self) {
        self.entry.editing = false;
        match parse_octave(&self.entry.text) {
            Ok(octave) => {
                self.notice = None;
                self.send(PianoMessage::SetOctave { octave });
            }
            Err(err) => {
                warn!("octave entry rejected: {}", err);
                self.notice = Some(err.to_string());
            }
        }
    }

    fn step_octave(&mut self, delta: i64) {
        self.entry.editing = false;
        let octave = self.session.octave() as i64 + delta;
        self.send(PianoMessage::SetOctave { octave });
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = &self.layout else {
            return;
        };
        let Some(key) = layout.hit(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.send(PianoMessage::Play { key }),
            MouseEventKind::Down(MouseButton::Right) => {
                self.send(PianoMessage::ToggleHold { key })
            }
            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: status, plots, piano, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status bar
                Constraint::Min(8),     // Waveform + spectrum
                Constraint::Length(12), // Piano
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let plots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);

        render_status(
            frame,
            chunks[0],
            &self.session,
            &self.entry,
            self.spectrum.dominant_frequency(),
            self.notice.as_deref(),
        );
        render_waveform(
            frame,
            plots[0],
            self.session.waveform(),
            self.session.scope().time_axis(),
        );
        render_spectrum(frame, plots[1], self.spectrum.data());

        let piano_block = Block::default().title(" Piano ").borders(Borders::ALL);
        let piano_inner = piano_block.inner(chunks[2]);
        frame.render_widget(piano_block, chunks[2]);
        self.refresh_layout(piano_inner);
        if let Some(layout) = &self.layout {
            render_piano(frame, self.session.keyboard(), layout);
        }

        let help = Paragraph::new(
            " [Click] Play  [Right click] Hold  [a-;] Play  [Shift] Hold  [0-9 Enter] Octave  [←/→] Octave  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    fn refresh_layout(&mut self, area: Rect) {
        let rect = KeyRect::new(area.x, area.y, area.width, area.height);
        let stale = self.layout.as_ref().map_or(true, |l| l.area() != rect);
        if stale {
            self.layout = Some(KeyboardLayout::compute(self.session.keyboard(), rect));
        }
    }
}
