use thiserror::Error;

/// Errors raised when a caller hands the core an argument it cannot use.
///
/// Nothing here is retryable or fatal: the same call with valid input succeeds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScopeError {
    /// Note-within-octave outside 0..=11
    #[error("note index {note} is outside 0..=11")]
    NoteOutOfRange { note: usize },

    /// Octave outside the supported range
    #[error("octave {octave} is outside {min}..={max}")]
    OctaveOutOfRange { octave: i64, min: u8, max: u8 },

    /// Octave text that does not parse as an integer
    #[error("'{0}' is not an octave number")]
    InvalidOctaveInput(String),

    /// Frequency overflowed (huge octave offset) or was otherwise not finite
    #[error("note {global_index} at octave {octave} has no finite frequency")]
    NonFiniteFrequency { global_index: usize, octave: u8 },

    /// Key id with no record on the keyboard
    #[error("no key with index {0}")]
    UnknownKey(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = ScopeError> = std::result::Result<T, E>;
