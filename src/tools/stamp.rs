use egui::Pos2;

use super::{Tool, ToolSettings};
use crate::drawable::{Drawable, Sticker};
use crate::surface::{Surface, is_on_surface};

/// Places the current sticker glyph on pointer-down.
#[derive(Debug, Clone, Default)]
pub struct StampTool;

impl StampTool {
    pub fn new() -> Self {
        Self
    }

    fn sticker_at(pos: Pos2, settings: &ToolSettings) -> Sticker {
        Sticker::new(pos, settings.sticker.clone(), settings.sticker_size)
    }
}

impl Tool for StampTool {
    fn name(&self) -> &'static str {
        "Stamp"
    }

    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        if !is_on_surface(pos) || settings.sticker.is_empty() {
            return None;
        }
        Some(Drawable::Sticker(Self::sticker_at(pos, settings)))
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _settings: &ToolSettings) -> Option<Drawable> {
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _settings: &ToolSettings) -> Option<Drawable> {
        None
    }

    fn cancel(&mut self, _settings: &ToolSettings) {}

    fn render_preview(&self, surface: &mut dyn Surface, pointer: Pos2, settings: &ToolSettings) {
        if is_on_surface(pointer) && !settings.sticker.is_empty() {
            Self::sticker_at(pointer, settings).render(surface);
        }
    }
}
