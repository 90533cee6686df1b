use egui::{Color32, Pos2};

use super::{StrokeStyle, Surface};

/// One call issued against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Polyline {
        points: Vec<Pos2>,
        style: StrokeStyle,
    },
    Circle {
        center: Pos2,
        radius: f32,
        style: StrokeStyle,
    },
    Glyph {
        anchor: Pos2,
        glyph: String,
        size: f32,
        color: Color32,
    },
}

/// Surface that keeps a log of draw calls instead of producing pixels.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            style,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: StrokeStyle) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            style,
        });
    }

    fn fill_glyph(&mut self, anchor: Pos2, glyph: &str, size: f32, color: Color32) {
        self.ops.push(DrawOp::Glyph {
            anchor,
            glyph: glyph.to_owned(),
            size,
            color,
        });
    }
}
