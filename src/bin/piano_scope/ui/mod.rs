//! Widgets for piano_scope
//!
//! Each widget is a free function drawing into a given area; the app owns all
//! state and decides the layout.

pub mod piano;
pub mod spectrum;
pub mod status;
pub mod waveform;

use piano_scope::keyboard::Rgb;
use ratatui::style::Color;

/// Terminal colour for a library colour
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Trace colour shared by the plots
pub const TRACE: Color = Color::Rgb(0x00, 0xff, 0x88);
