use egui::Pos2;

use super::{Tool, ToolSettings};
use crate::drawable::{Drawable, MutableStroke};
use crate::surface::{StrokeStyle, Surface, is_on_surface};

/// Width of the cursor ring outline.
const CURSOR_RING_WIDTH: f32 = 1.0;

/// Freehand marker.
///
/// Owns the in-progress stroke until pointer-up hands it to the history.
#[derive(Debug, Clone)]
pub struct MarkerTool {
    stroke: MutableStroke,
    drawing: bool,
}

impl MarkerTool {
    pub fn new(settings: &ToolSettings) -> Self {
        Self {
            stroke: MutableStroke::new(settings.color(), settings.thickness),
            drawing: false,
        }
    }

    /// The stroke being drawn; empty when idle.
    pub fn current_stroke(&self) -> &MutableStroke {
        &self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn reset(&mut self, settings: &ToolSettings) -> MutableStroke {
        self.drawing = false;
        std::mem::replace(
            &mut self.stroke,
            MutableStroke::new(settings.color(), settings.thickness),
        )
    }
}

impl Tool for MarkerTool {
    fn name(&self) -> &'static str {
        "Marker"
    }

    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        // Start a fresh stroke with the current settings
        self.reset(settings);
        self.stroke.add_point(pos);
        self.drawing = true;
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, _settings: &ToolSettings) -> Option<Drawable> {
        if self.drawing {
            self.stroke.add_point(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        if !self.drawing {
            return None;
        }
        let stroke = self.reset(settings);
        if stroke.is_empty() {
            return None;
        }
        Some(Drawable::Stroke(stroke.into_stroke()))
    }

    fn cancel(&mut self, settings: &ToolSettings) {
        if self.drawing {
            log::debug!(
                "Discarding in-progress stroke of {} points",
                self.stroke.points().len()
            );
        }
        self.reset(settings);
    }

    fn render_preview(&self, surface: &mut dyn Surface, pointer: Pos2, settings: &ToolSettings) {
        self.stroke.render(surface);
        if is_on_surface(pointer) {
            surface.stroke_circle(
                pointer,
                settings.thickness / 2.0,
                StrokeStyle::new(CURSOR_RING_WIDTH, settings.color()),
            );
        }
    }
}
