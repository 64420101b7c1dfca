// Purpose: key -> frequency -> waveform, and the command queue feeding it
// This layer sits between the keyboard state and the DSP primitives

pub mod message;
pub mod scope;
pub mod waveform;

pub use message::{MessageReceiver, PianoMessage};
pub use scope::Scope;
pub use waveform::{WaveLabel, Waveform};
