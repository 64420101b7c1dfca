/*
Keyboard Geometry
=================

White keys sit side by side across the full height. Each black key starts
0.6 of a white key past the left edge of the white key below it and is 0.8
of a white key wide, so it straddles the boundary between two white keys:

  white slot    0       1       2
              |       |       |       |
              |    [C#==]  [D#==]     |
              |    [====]  [====]     |
              |   C   |   D   |   E   |
                   ^ 0.6 of a key in, 0.8 of a key wide

Which white key a black key belongs to follows from the scale itself: it is
the natural immediately below it (C# -> C, D# -> D, F# -> F, ...). Over two
octaves that gives white slots 0 1 3 4 5 7 8 10 11 12.

Black keys are drawn on top, so hit testing checks them first.

The layout is plain arithmetic on cell coordinates; callers cache it and
recompute only when the drawing area changes size.
*/

use crate::keyboard::key::{KeyId, KeyRecord, Keyboard};
use crate::pitch::is_natural;

/// Naturals per octave
const WHITE_PER_OCTAVE: usize = 7;
/// Narrowest white key that still fits a label
const MIN_WHITE_WIDTH: u16 = 3;
const BLACK_OFFSET: f64 = 0.6;
const BLACK_WIDTH: f64 = 0.8;
const BLACK_HEIGHT: f64 = 0.6;

/// Rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl KeyRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Index of the white key a key sits on (for black keys: the one to its left).
pub fn white_slot(key: &KeyRecord) -> usize {
    let naturals_up_to = (0..=key.note()).filter(|&n| is_natural(n)).count();
    key.octave_offset() * WHITE_PER_OCTAVE + naturals_up_to - 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    area: KeyRect,
    white: Vec<(KeyId, KeyRect)>,
    black: Vec<(KeyId, KeyRect)>,
}

impl KeyboardLayout {
    pub fn compute(keyboard: &Keyboard, area: KeyRect) -> Self {
        let white_count = keyboard.white_keys().count().max(1);
        let white_width = (area.width / white_count as u16).max(MIN_WHITE_WIDTH);
        let total_width = white_width.saturating_mul(white_count as u16);
        let start_x = area.x + area.width.saturating_sub(total_width) / 2;

        let white_rect = |slot: usize| {
            let x = start_x.saturating_add(white_width.saturating_mul(slot as u16));
            KeyRect::new(x, area.y, white_width, area.height)
        };

        let white = keyboard
            .white_keys()
            .map(|key| (key.id, white_rect(white_slot(key))))
            .filter(|(_, rect)| rect.right() <= area.right())
            .collect();

        let black_width = ((white_width as f64 * BLACK_WIDTH).round() as u16).max(1);
        let black_height = ((area.height as f64 * BLACK_HEIGHT).round() as u16).max(1);
        let black_shift = (white_width as f64 * BLACK_OFFSET).round() as u16;

        let black = keyboard
            .black_keys()
            .map(|key| {
                let base = white_rect(white_slot(key));
                let rect = KeyRect::new(
                    base.x.saturating_add(black_shift),
                    area.y,
                    black_width,
                    black_height.min(area.height),
                );
                (key.id, rect)
            })
            .filter(|(_, rect)| rect.right() <= area.right())
            .collect();

        Self { area, white, black }
    }

    pub fn area(&self) -> KeyRect {
        self.area
    }

    pub fn white(&self) -> &[(KeyId, KeyRect)] {
        &self.white
    }

    pub fn black(&self) -> &[(KeyId, KeyRect)] {
        &self.black
    }

    /// Key under a cell; black keys win where they overlap white ones.
    pub fn hit(&self, x: u16, y: u16) -> Option<KeyId> {
        self.black
            .iter()
            .chain(self.white.iter())
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(id, _)| *id)
    }
}
