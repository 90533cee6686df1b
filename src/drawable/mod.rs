//! Committed, renderable units of a sketch.

mod sticker;
mod stroke;

pub use sticker::{STICKER_COLOR, Sticker};
pub use stroke::{MutableStroke, Stroke};

use crate::surface::Surface;

/// A stroke or a sticker.
///
/// The history orders drawables chronologically regardless of their kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    /// Paint this drawable. Never touches model state.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            Drawable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            Drawable::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}
