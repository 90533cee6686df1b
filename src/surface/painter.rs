use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{StrokeStyle, Surface};

/// Background of the on-screen canvas.
pub const PAPER_COLOR: Color32 = Color32::WHITE;

/// On-screen surface backed by an egui painter.
///
/// Canvas coordinates are offset by the top-left corner of `rect`, the
/// screen rectangle the canvas occupies.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, PAPER_COLOR);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(points, Stroke::new(style.width, style.color)));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: StrokeStyle) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            Stroke::new(style.width, style.color),
        );
    }

    fn fill_glyph(&mut self, anchor: Pos2, glyph: &str, size: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);
        // Put the first glyph's baseline start on the anchor
        let baseline = galley
            .rows
            .first()
            .and_then(|row| row.glyphs.first())
            .map_or(Vec2::ZERO, |first| first.pos.to_vec2());
        self.painter
            .galley(self.to_screen(anchor) - baseline, galley, color);
    }
}
