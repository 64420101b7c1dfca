//! Frequency model: note/octave to Hz, and note naming.

/// Equal-tempered frequency table and octave scaling.
pub mod frequency;
/// Note names and display names for keys.
pub mod notes;

pub use frequency::{
    base_frequency, frequency, frequency_from_global_index, BASE_FREQUENCIES, MAX_OCTAVE,
    MIN_OCTAVE, NOTES_PER_OCTAVE,
};
pub use notes::{display_name, is_natural, note_name, parse_octave, NOTE_NAMES};
