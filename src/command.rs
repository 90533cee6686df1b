use std::fmt;

use crate::error::SketchError;

/// Discrete user activations that change the sketch pad.
///
/// Pointer input is not a command; it flows through [`crate::input::InputEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch to the thin marker
    SelectThinMarker,
    /// Switch to the thick marker
    SelectThickMarker,
    /// Switch to stamp mode with the palette entry at this index
    SelectSticker(usize),
    /// Append a glyph to the sticker palette
    AddCustomSticker(String),
    /// Set the marker hue in degrees
    SetHue(f32),
    Undo,
    Redo,
    /// Drop all drawables, including the redo history
    Clear,
}

/// Result of executing a command
pub type CommandResult = Result<(), SketchError>;

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SelectThinMarker => write!(f, "select thin marker"),
            Command::SelectThickMarker => write!(f, "select thick marker"),
            Command::SelectSticker(index) => write!(f, "select sticker #{index}"),
            Command::AddCustomSticker(glyph) => write!(f, "add sticker {glyph:?}"),
            Command::SetHue(hue) => write!(f, "set hue {hue}"),
            Command::Undo => write!(f, "undo"),
            Command::Redo => write!(f, "redo"),
            Command::Clear => write!(f, "clear"),
        }
    }
}
