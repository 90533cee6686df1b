use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Color sticker glyphs are filled with.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// Glyph stamped at an anchor point. Immutable once created.
///
/// The anchor is the start of the glyph's baseline, both for the stamp
/// preview and for the committed sticker, so stamping does not shift it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_glyph(self.position, &self.glyph, self.size, STICKER_COLOR);
    }
}
