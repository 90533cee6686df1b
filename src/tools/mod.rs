use egui::{Color32, Pos2};

use crate::color::{DEFAULT_MARKER_COLOR, marker_color};
use crate::drawable::Drawable;
use crate::surface::Surface;

mod marker;
mod stamp;

pub use marker::MarkerTool;
pub use stamp::StampTool;

/// Drawing parameters shared by the tools.
///
/// Changing them only affects future strokes and previews, never the history.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    /// Marker thickness in logical pixels
    pub thickness: f32,
    /// Hue picked by the user, if any
    pub hue: Option<f32>,
    /// Sticker glyph placed by the stamp tool
    pub sticker: String,
    /// Em size of stamped glyphs
    pub sticker_size: f32,
}

impl ToolSettings {
    /// Marker color: black until a hue has been picked.
    pub fn color(&self) -> Color32 {
        self.hue.map_or(DEFAULT_MARKER_COLOR, marker_color)
    }
}

/// Pointer-driven tool.
///
/// Handlers return a finished drawable when the interaction produced one;
/// committing it is up to the caller.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable>;

    /// Handle pointer movement, pressed or not.
    fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable>;

    /// Handle pointer release on the canvas.
    fn on_pointer_up(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable>;

    /// Drop any in-progress work (pointer left the canvas, canvas cleared).
    fn cancel(&mut self, settings: &ToolSettings);

    /// Draw the live preview for a pointer at `pointer` (`NaN` when outside).
    fn render_preview(&self, surface: &mut dyn Surface, pointer: Pos2, settings: &ToolSettings);
}

/// All available tools.
#[derive(Debug, Clone)]
pub enum ToolType {
    Marker(MarkerTool),
    Stamp(StampTool),
}

impl ToolType {
    pub fn marker(settings: &ToolSettings) -> Self {
        Self::Marker(MarkerTool::new(settings))
    }

    pub fn stamp() -> Self {
        Self::Stamp(StampTool::new())
    }

    /// Whether pointer-down places a sticker instead of starting a stroke.
    pub fn is_stamp(&self) -> bool {
        matches!(self, Self::Stamp(_))
    }

    pub fn as_marker(&self) -> Option<&MarkerTool> {
        match self {
            Self::Marker(tool) => Some(tool),
            Self::Stamp(_) => None,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Marker(tool) => tool.name(),
            Self::Stamp(tool) => tool.name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_down(pos, settings),
            Self::Stamp(tool) => tool.on_pointer_down(pos, settings),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_move(pos, settings),
            Self::Stamp(tool) => tool.on_pointer_move(pos, settings),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, settings: &ToolSettings) -> Option<Drawable> {
        match self {
            Self::Marker(tool) => tool.on_pointer_up(pos, settings),
            Self::Stamp(tool) => tool.on_pointer_up(pos, settings),
        }
    }

    fn cancel(&mut self, settings: &ToolSettings) {
        match self {
            Self::Marker(tool) => tool.cancel(settings),
            Self::Stamp(tool) => tool.cancel(settings),
        }
    }

    fn render_preview(&self, surface: &mut dyn Surface, pointer: Pos2, settings: &ToolSettings) {
        match self {
            Self::Marker(tool) => tool.render_preview(surface, pointer, settings),
            Self::Stamp(tool) => tool.render_preview(surface, pointer, settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ToolSettings {
        ToolSettings {
            thickness: 1.0,
            hue: None,
            sticker: "😎".to_owned(),
            sticker_size: 24.0,
        }
    }

    #[test]
    fn color_is_black_until_a_hue_is_picked() {
        let mut settings = settings();
        assert_eq!(settings.color(), Color32::BLACK);
        settings.hue = Some(0.0);
        assert_eq!(settings.color(), Color32::from_rgb(191, 64, 64));
    }

    #[test]
    fn stamp_mode_follows_the_tool() {
        assert!(!ToolType::marker(&settings()).is_stamp());
        assert!(ToolType::stamp().is_stamp());
        assert_eq!(ToolType::stamp().name(), "Stamp");
    }
}
