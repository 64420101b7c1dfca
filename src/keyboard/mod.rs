//! Piano state owned by the presentation layer.
//!
//! Keys are plain records in a keyed map; input handlers look a key up by its
//! [`KeyId`] instead of capturing per-button closures. The [`Session`] ties
//! those records to the held-note set, the active octave and the scope.

pub mod held;
pub mod key;
pub mod layout;
pub mod session;

pub use held::HeldNotes;
pub use key::{KeyColor, KeyId, KeyRecord, KeyVisual, Keyboard, Rgb, KEYBOARD_OCTAVES};
pub use layout::{KeyRect, KeyboardLayout};
pub use session::Session;
