use std::collections::BTreeMap;
use std::fmt;

use crate::{
    error::{Result, ScopeError},
    pitch::{display_name, is_natural, NOTES_PER_OCTAVE},
};

/// Octaves shown on the keyboard
pub const KEYBOARD_OCTAVES: usize = 2;

/// Identifies a key by its global note index (semitones above the C of the
/// active octave).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyId(pub usize);

impl KeyId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {}", self.0)
    }
}

/// 24-bit colour, kept free of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Natural colour of a key at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColor {
    White,
    Black,
}

impl KeyColor {
    pub fn for_note(note: usize) -> Self {
        if is_natural(note) {
            KeyColor::White
        } else {
            KeyColor::Black
        }
    }

    pub fn resting(self) -> Rgb {
        match self {
            KeyColor::White => Rgb(0xff, 0xff, 0xff),
            KeyColor::Black => Rgb(0x1a, 0x1a, 0x1a),
        }
    }

    /// Shaded fill while held
    pub fn held(self) -> Rgb {
        match self {
            KeyColor::White => Rgb(0xcc, 0xcc, 0xcc),
            KeyColor::Black => Rgb(0x44, 0x44, 0x44),
        }
    }

    pub fn pressed(self) -> Rgb {
        match self {
            KeyColor::White => Rgb(0x9c, 0xff, 0xd0),
            KeyColor::Black => Rgb(0x00, 0x99, 0x52),
        }
    }

    /// Colour for the key label
    pub fn text(self) -> Rgb {
        match self {
            KeyColor::White => Rgb(0x00, 0x00, 0x00),
            KeyColor::Black => Rgb(0xff, 0xff, 0xff),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyVisual {
    #[default]
    Resting,
    /// Momentarily played
    Pressed,
    Held,
}

/// Everything the UI needs to draw and dispatch one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub id: KeyId,
    pub name: String,
    pub color: KeyColor,
    pub visual: KeyVisual,
}

impl KeyRecord {
    fn new(id: KeyId, octave: u8) -> Self {
        Self {
            id,
            name: display_name(id.index(), octave),
            color: KeyColor::for_note(id.index()),
            visual: KeyVisual::Resting,
        }
    }

    /// Semitone within the octave (0 = C)
    pub fn note(&self) -> usize {
        self.id.index() % NOTES_PER_OCTAVE
    }

    /// Octaves above the active one
    pub fn octave_offset(&self) -> usize {
        self.id.index() / NOTES_PER_OCTAVE
    }

    pub fn is_white(&self) -> bool {
        self.color == KeyColor::White
    }

    /// Current fill colour. Released keys go back to the stored resting colour.
    pub fn fill(&self) -> Rgb {
        match self.visual {
            KeyVisual::Resting => self.color.resting(),
            KeyVisual::Pressed => self.color.pressed(),
            KeyVisual::Held => self.color.held(),
        }
    }
}

/// Per-key records for a two-octave keyboard, looked up by [`KeyId`].
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: BTreeMap<KeyId, KeyRecord>,
}

impl Keyboard {
    pub fn new(octave: u8) -> Self {
        let keys = (0..KEYBOARD_OCTAVES * NOTES_PER_OCTAVE)
            .map(|index| {
                let id = KeyId(index);
                (id, KeyRecord::new(id, octave))
            })
            .collect();

        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, id: KeyId) -> Result<&KeyRecord> {
        self.keys.get(&id).ok_or(ScopeError::UnknownKey(id.index()))
    }

    pub fn get_mut(&mut self, id: KeyId) -> Result<&mut KeyRecord> {
        self.keys
            .get_mut(&id)
            .ok_or(ScopeError::UnknownKey(id.index()))
    }

    /// All keys, low to high
    pub fn keys(&self) -> impl Iterator<Item = &KeyRecord> + '_ {
        self.keys.values()
    }

    pub fn white_keys(&self) -> impl Iterator<Item = &KeyRecord> + '_ {
        self.keys().filter(|k| k.is_white())
    }

    pub fn black_keys(&self) -> impl Iterator<Item = &KeyRecord> + '_ {
        self.keys().filter(|k| !k.is_white())
    }

    pub fn set_visual(&mut self, id: KeyId, visual: KeyVisual) -> Result<()> {
        self.get_mut(id)?.visual = visual;
        Ok(())
    }

    /// Rewrite key names after an octave change
    pub fn relabel(&mut self, octave: u8) {
        for key in self.keys.values_mut() {
            key.name = display_name(key.id.index(), octave);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_octaves_of_keys() {
        let keyboard = Keyboard::new(4);
        assert_eq!(keyboard.len(), 24);
        assert_eq!(keyboard.white_keys().count(), 14);
        assert_eq!(keyboard.black_keys().count(), 10);
    }

    #[test]
    fn records_carry_name_and_color() {
        let keyboard = Keyboard::new(4);
        let c_sharp = keyboard.get(KeyId(13)).unwrap();
        assert_eq!(c_sharp.name, "C#5");
        assert_eq!(c_sharp.color, KeyColor::Black);
        assert_eq!(c_sharp.note(), 1);
        assert_eq!(c_sharp.octave_offset(), 1);
        assert_eq!(c_sharp.fill(), Rgb(0x1a, 0x1a, 0x1a));
    }

    #[test]
    fn held_then_resting_restores_color() {
        let mut keyboard = Keyboard::new(4);
        keyboard.set_visual(KeyId(4), KeyVisual::Held).unwrap();
        assert_eq!(keyboard.get(KeyId(4)).unwrap().fill(), Rgb(0xcc, 0xcc, 0xcc));
        keyboard.set_visual(KeyId(4), KeyVisual::Resting).unwrap();
        assert_eq!(keyboard.get(KeyId(4)).unwrap().fill(), Rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn unknown_key() {
        let keyboard = Keyboard::new(4);
        assert_eq!(keyboard.get(KeyId(24)), Err(ScopeError::UnknownKey(24)));
    }

    #[test]
    fn relabel_changes_every_name() {
        let mut keyboard = Keyboard::new(4);
        keyboard.relabel(0);
        assert_eq!(keyboard.get(KeyId(0)).unwrap().name, "C0");
        assert_eq!(keyboard.get(KeyId(23)).unwrap().name, "B1");
    }
}
