use crate::error::{Result, ScopeError};

/*
Equal-Tempered Frequencies
==========================

Every pitch is derived from one table: the twelve semitones of octave 0,
C0 (16.35 Hz) up to B0 (30.87 Hz). Moving up an octave doubles the frequency,
so any note is simply

  frequency(note, octave) = BASE_FREQUENCIES[note] * 2^octave

  C0 = 16.35 Hz
  C4 = 16.35 * 16 = 261.6 Hz   (middle C)
  A4 = 27.50 * 16 = 440.0 Hz   (tuning reference)

Global Note Index:
------------------
The on-screen keyboard spans more than one octave. Keys are numbered from the
C of the active octave upward, so index 13 is C# one octave above. The index
splits into `index % 12` (the semitone) and `index / 12` (extra octaves):

  index 4,  octave 4  -> E4
  index 16, octave 4  -> E5 = frequency(4, 4) * 2
*/

pub const NOTES_PER_OCTAVE: usize = 12;
pub const MIN_OCTAVE: u8 = 0;
pub const MAX_OCTAVE: u8 = 8;

/// Frequencies (Hz) of C0 through B0.
pub const BASE_FREQUENCIES: [f64; NOTES_PER_OCTAVE] = [
    16.35, 17.32, 18.35, 19.45, 20.60, 21.83, 23.12, 24.50, 25.96, 27.50, 29.14, 30.87,
];

/// Octave-0 frequency of a semitone (0 = C, 11 = B).
pub fn base_frequency(note_in_octave: usize) -> Result<f64> {
    BASE_FREQUENCIES
        .get(note_in_octave)
        .copied()
        .ok_or(ScopeError::NoteOutOfRange {
            note: note_in_octave,
        })
}

/// Frequency of a semitone in the given octave (0..=8).
pub fn frequency(note_in_octave: usize, octave: u8) -> Result<f64> {
    if octave > MAX_OCTAVE {
        return Err(ScopeError::OctaveOutOfRange {
            octave: octave as i64,
            min: MIN_OCTAVE,
            max: MAX_OCTAVE,
        });
    }
    Ok(base_frequency(note_in_octave)? * 2.0_f64.powi(octave as i32))
}

/// Frequency of a key counted in semitones from the C of `octave`.
///
/// Indices past 11 land in the following octaves.
pub fn frequency_from_global_index(global_index: usize, octave: u8) -> Result<f64> {
    let note_in_octave = global_index % NOTES_PER_OCTAVE;
    let octave_offset = global_index / NOTES_PER_OCTAVE;

    let non_finite = ScopeError::NonFiniteFrequency {
        global_index,
        octave,
    };
    let exponent = i32::try_from(octave_offset).map_err(|_| non_finite.clone())?;
    let freq = frequency(note_in_octave, octave)? * 2.0_f64.powi(exponent);

    if freq.is_finite() {
        Ok(freq)
    } else {
        Err(non_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_matches_published_values() {
        let expected = [
            16.35, 17.32, 18.35, 19.45, 20.60, 21.83, 23.12, 24.50, 25.96, 27.50, 29.14, 30.87,
        ];
        for (note, &hz) in expected.iter().enumerate() {
            assert_eq!(base_frequency(note), Ok(hz));
        }
        assert_eq!(
            base_frequency(12),
            Err(ScopeError::NoteOutOfRange { note: 12 })
        );
    }

    #[test]
    fn octaves_double() {
        for note in 0..NOTES_PER_OCTAVE {
            for octave in 0..MAX_OCTAVE {
                let low = frequency(note, octave).unwrap();
                let high = frequency(note, octave + 1).unwrap();
                assert_eq!(high, 2.0 * low, "note {note} octave {octave}");
            }
        }
    }

    #[test]
    fn rejects_octave_above_eight() {
        assert!(matches!(
            frequency(0, 9),
            Err(ScopeError::OctaveOutOfRange { octave: 9, .. })
        ));
    }

    #[test]
    fn middle_c_and_a440() {
        let c4 = frequency(0, 4).unwrap();
        assert!((c4 - 261.6).abs() < 1e-9, "got {c4}");
        let a4 = frequency(9, 4).unwrap();
        assert!((a4 - 440.0).abs() < 1e-9, "got {a4}");
    }

    #[test]
    fn global_index_wraps_into_next_octave() {
        for octave in 0..=MAX_OCTAVE {
            for idx in 0..12 {
                assert_eq!(
                    frequency_from_global_index(idx, octave),
                    frequency(idx, octave)
                );
            }
            for idx in 12..24 {
                assert_eq!(
                    frequency_from_global_index(idx, octave).unwrap(),
                    frequency(idx - 12, octave).unwrap() * 2.0
                );
            }
        }
    }

    #[test]
    fn absurd_offsets_are_not_finite() {
        assert!(matches!(
            frequency_from_global_index(12 * 2000, 8),
            Err(ScopeError::NonFiniteFrequency { .. })
        ));
    }
}
