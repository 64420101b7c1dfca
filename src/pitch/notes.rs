/*
Note Names
==========

Semitones are named with sharps only, matching the labels printed on the keys:

  0  C     3  D#    6  F#    9  A
  1  C#    4  E     7  G     10 A#
  2  D     5  F     8  G#    11 B

A key's display name is its semitone name followed by its absolute octave,
so the 14th key (index 13) with octave 4 selected reads "C#5".

Naturals (white keys): C D E F G A B -> semitones 0 2 4 5 7 9 11
*/

use crate::error::{Result, ScopeError};
use crate::pitch::frequency::NOTES_PER_OCTAVE;

pub const NOTE_NAMES: [&str; NOTES_PER_OCTAVE] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone name; indices past 11 wrap around.
pub fn note_name(note: usize) -> &'static str {
    NOTE_NAMES[note % NOTES_PER_OCTAVE]
}

/// Whether the semitone sits on a white key
pub fn is_natural(note: usize) -> bool {
    matches!(note % NOTES_PER_OCTAVE, 0 | 2 | 4 | 5 | 7 | 9 | 11)
}

/// Label for a key, e.g. `display_name(13, 4) == "C#5"`.
pub fn display_name(global_index: usize, octave: u8) -> String {
    let absolute_octave = octave as usize + global_index / NOTES_PER_OCTAVE;
    format!("{}{}", note_name(global_index), absolute_octave)
}

/// Parse user-entered octave text.
///
/// Only checks that the text is an integer; range checks belong to the
/// caller's [`OctaveRange`](crate::config::OctaveRange).
pub fn parse_octave(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ScopeError::InvalidOctaveInput(trimmed.to_string()))
}
