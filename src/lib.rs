pub mod config;
pub mod dsp; // Triangle synthesis and chord mixing
pub mod error;
pub mod keyboard; // Key records, held notes, session state
pub mod pitch; // Note/octave to frequency
pub mod synth; // Keys to waveforms, command queue

pub use config::ScopeConfig;
pub use error::{Result, ScopeError};
pub use keyboard::{KeyId, Session};
pub use synth::{PianoMessage, Scope, WaveLabel, Waveform};
