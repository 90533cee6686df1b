//! Drawing surfaces the renderer paints onto.
//!
//! A [`Surface`] is the only thing drawables and previews know how to draw
//! on. Coordinates passed to a surface are always canvas coordinates; each
//! implementation maps them to its own device space (screen position, export
//! magnification, ...).

use egui::{Color32, Pos2};

mod glyphs;
mod painter;
mod pixmap;
mod recording;

pub use glyphs::GlyphSet;
pub use painter::{PAPER_COLOR, PainterSurface};
pub use pixmap::PixmapSurface;
pub use recording::{DrawOp, RecordingSurface};

/// Width and color of a stroked path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color32,
}

impl StrokeStyle {
    pub fn new(width: f32, color: Color32) -> Self {
        Self { width, color }
    }
}

/// Something that can be painted on, modeled on a 2-D canvas context.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke a single open path through `points`, in order.
    ///
    /// The whole polyline is stroked as one path so joins render correctly.
    /// Fewer than two points produce no visible segment.
    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: StrokeStyle);

    /// Draw `glyph` with its baseline starting at `anchor`.
    fn fill_glyph(&mut self, anchor: Pos2, glyph: &str, size: f32, color: Color32);
}

/// Whether a pointer sample denotes a real position on the surface.
///
/// A pointer outside the surface is stored as `NaN`.
pub fn is_on_surface(pos: Pos2) -> bool {
    pos.x.is_finite() && pos.y.is_finite()
}

/// Pointer position used while the pointer is outside the surface.
pub const OFF_SURFACE: Pos2 = Pos2::new(f32::NAN, f32::NAN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_surface_is_not_on_surface() {
        assert!(!is_on_surface(OFF_SURFACE));
        assert!(!is_on_surface(Pos2::new(3.0, f32::INFINITY)));
        assert!(is_on_surface(Pos2::new(0.0, 0.0)));
    }
}
