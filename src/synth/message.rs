use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::keyboard::KeyId;

/// Commands from the presentation layer, applied in queue order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PianoMessage {
    /// Momentary play: plot one key without touching the held set
    Play { key: KeyId },
    /// Hold the key if it is free, release it if it is held
    ToggleHold { key: KeyId },
    /// Select an octave; out-of-range values are rejected
    SetOctave { octave: i64 },
    /// Drop the pressed highlight left by the last `Play`
    ReleasePressed,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<PianoMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<PianoMessage> {
    fn pop(&mut self) -> Option<PianoMessage> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for VecDeque<PianoMessage> {
    fn pop(&mut self) -> Option<PianoMessage> {
        self.pop_front()
    }
}
