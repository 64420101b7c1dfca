use tracing::{debug, info, warn};

use crate::{
    config::ScopeConfig,
    error::{Result, ScopeError},
    keyboard::{
        held::HeldNotes,
        key::{KeyId, KeyVisual, Keyboard},
    },
    pitch::parse_octave,
    synth::{MessageReceiver, PianoMessage, Scope, Waveform},
};

/// All mutable state behind the piano: selected octave, held keys, key
/// visuals and the waveform currently on screen.
///
/// The presentation layer owns exactly one of these and funnels every input
/// through it, so a held-set change and the re-render it causes always happen
/// together.
pub struct Session {
    scope: Scope,
    keyboard: Keyboard,
    held: HeldNotes,
    octave: u8,
    waveform: Waveform,
    /// Bumped whenever `waveform` is replaced
    revision: u64,
    pressed: Option<KeyId>,
    last_error: Option<ScopeError>,
}

impl Session {
    pub fn new(config: ScopeConfig) -> Result<Self> {
        let scope = Scope::new(config)?;
        let octave = config.default_octave;
        let waveform = Waveform::silence(scope.sample_count());

        Ok(Self {
            scope,
            keyboard: Keyboard::new(octave),
            held: HeldNotes::new(),
            octave,
            waveform,
            revision: 0,
            pressed: None,
            last_error: None,
        })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn held(&self) -> &HeldNotes {
        &self.held
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pressed(&self) -> Option<KeyId> {
        self.pressed
    }

    fn show(&mut self, waveform: Waveform) -> &Waveform {
        self.waveform = waveform;
        self.revision += 1;
        &self.waveform
    }

    /// Plot a single key without changing what is held.
    pub fn play(&mut self, key: KeyId) -> Result<&Waveform> {
        let record = self.keyboard.get(key)?;
        let waveform = self
            .scope
            .render_note(key.index(), &record.name, self.octave)?;

        self.clear_pressed();
        if !self.held.contains(key.index()) {
            self.keyboard.set_visual(key, KeyVisual::Pressed)?;
            self.pressed = Some(key);
        }

        Ok(self.show(waveform))
    }

    /// Return the last played key to its resting look (held keys stay shaded).
    pub fn clear_pressed(&mut self) {
        if let Some(key) = self.pressed.take() {
            if let Ok(record) = self.keyboard.get_mut(key) {
                if record.visual == KeyVisual::Pressed {
                    record.visual = KeyVisual::Resting;
                }
            }
        }
    }

    /// Hold the key if free, release it if held, then plot the held chord.
    pub fn toggle_hold(&mut self, key: KeyId) -> Result<&Waveform> {
        let name = self.keyboard.get(key)?.name.clone();

        let now_held = self.held.toggle(key.index(), name.as_str());
        if self.pressed == Some(key) {
            self.pressed = None;
        }
        let visual = if now_held {
            KeyVisual::Held
        } else {
            KeyVisual::Resting
        };
        self.keyboard.set_visual(key, visual)?;
        debug!(key = key.index(), now_held, held = self.held.len(), "toggled {}", name);

        let waveform = self.scope.render_held(&self.held, self.octave)?;
        Ok(self.show(waveform))
    }

    /// Select a new octave, keeping the current one if `octave` is out of range.
    ///
    /// Key and held-note names follow the new octave; a held chord is
    /// re-plotted at its new pitch.
    pub fn set_octave(&mut self, octave: i64) -> Result<u8> {
        let octave = self.scope.config().octave_range.check(octave)?;
        if octave == self.octave {
            return Ok(octave);
        }

        info!(from = self.octave, to = octave, "octave changed");
        self.octave = octave;
        self.keyboard.relabel(octave);
        self.held.relabel(octave);

        if !self.held.is_empty() {
            let waveform = self.scope.render_held(&self.held, octave)?;
            self.show(waveform);
        }
        Ok(octave)
    }

    /// Parse and apply user-entered octave text.
    pub fn submit_octave(&mut self, input: &str) -> Result<u8> {
        let octave = parse_octave(input)?;
        self.set_octave(octave)
    }

    pub fn handle(&mut self, message: PianoMessage) -> Result<()> {
        match message {
            PianoMessage::Play { key } => self.play(key).map(|_| ()),
            PianoMessage::ToggleHold { key } => self.toggle_hold(key).map(|_| ()),
            PianoMessage::SetOctave { octave } => self.set_octave(octave).map(|_| ()),
            PianoMessage::ReleasePressed => {
                self.clear_pressed();
                Ok(())
            }
        }
    }

    /// Apply every queued message in order. Returns how many were handled.
    ///
    /// Rejected messages leave the session unchanged; the most recent error is
    /// kept for [`take_error`](Self::take_error).
    pub fn drain<R: MessageReceiver>(&mut self, rx: &mut R) -> usize {
        let mut handled = 0;
        while let Some(message) = rx.pop() {
            if let Err(err) = self.handle(message) {
                warn!(?message, "rejected: {}", err);
                self.last_error = Some(err);
            }
            handled += 1;
        }
        handled
    }

    pub fn take_error(&mut self) -> Option<ScopeError> {
        self.last_error.take()
    }
}
