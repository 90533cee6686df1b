use egui::Pos2;

use crate::command::{Command, CommandResult};
use crate::config::SketchConfig;
use crate::drawable::{Drawable, MutableStroke};
use crate::error::{SketchError, SketchResult};
use crate::export;
use crate::history::History;
use crate::input::InputEvent;
use crate::surface::{GlyphSet, OFF_SURFACE};
use crate::tools::{Tool, ToolSettings, ToolType};

/// Application state of the sketch pad.
///
/// Owns the drawable history, the active tool with its live preview and the
/// current settings. Every mutation requests a redraw; the host polls
/// [`SketchPad::take_redraw_request`] once per frame.
#[derive(Debug)]
pub struct SketchPad {
    config: SketchConfig,
    stickers: Vec<String>,
    history: History,
    tool: ToolType,
    settings: ToolSettings,
    /// Last pointer position in canvas coordinates, `NaN` while outside
    pointer: Pos2,
    version: u64,
    redraw_requested: bool,
}

impl SketchPad {
    pub fn new(config: SketchConfig) -> Self {
        let settings = ToolSettings {
            thickness: config.thin_thickness,
            hue: None,
            sticker: config.stickers.first().cloned().unwrap_or_default(),
            sticker_size: config.sticker_size,
        };
        Self {
            stickers: config.stickers.clone(),
            history: History::new(),
            tool: ToolType::marker(&settings),
            settings,
            pointer: OFF_SURFACE,
            version: 0,
            // Paint the blank canvas once
            redraw_requested: true,
            config,
        }
    }

    /// Feed one pointer event to the active tool.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.pointer = pos;
        let finished = self.tool.on_pointer_down(pos, &self.settings);
        self.commit(finished);
        self.request_redraw();
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.pointer = pos;
        let finished = self.tool.on_pointer_move(pos, &self.settings);
        self.commit(finished);
        self.request_redraw();
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.pointer = pos;
        let finished = self.tool.on_pointer_up(pos, &self.settings);
        self.commit(finished);
        self.request_redraw();
    }

    /// Pointer left the canvas: hide the indicators and drop the live stroke.
    pub fn pointer_leave(&mut self) {
        self.pointer = OFF_SURFACE;
        self.tool.cancel(&self.settings);
        self.request_redraw();
    }

    fn commit(&mut self, finished: Option<Drawable>) {
        if let Some(drawable) = finished {
            self.history.commit(drawable);
        }
    }

    /// Execute a discrete command.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        log::debug!("Executing {command}");
        match command {
            Command::SelectThinMarker => self.select_thin_marker(),
            Command::SelectThickMarker => self.select_thick_marker(),
            Command::SelectSticker(index) => self.select_sticker(index)?,
            Command::AddCustomSticker(glyph) => {
                self.add_custom_sticker(&glyph)?;
            }
            Command::SetHue(hue) => self.set_hue(hue)?,
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::Clear => self.clear(),
        }
        Ok(())
    }

    pub fn select_thin_marker(&mut self) {
        self.select_marker(self.config.thin_thickness);
    }

    pub fn select_thick_marker(&mut self) {
        self.select_marker(self.config.thick_thickness);
    }

    fn select_marker(&mut self, thickness: f32) {
        self.settings.thickness = thickness;
        self.switch_tool(ToolType::marker(&self.settings));
    }

    /// Enter stamp mode with the palette glyph at `index`.
    pub fn select_sticker(&mut self, index: usize) -> SketchResult<()> {
        let Some(glyph) = self.stickers.get(index) else {
            log::warn!("No sticker at index {index}");
            return Err(SketchError::UnknownSticker {
                index,
                len: self.stickers.len(),
            });
        };
        self.settings.sticker = glyph.clone();
        self.switch_tool(ToolType::stamp());
        Ok(())
    }

    fn switch_tool(&mut self, tool: ToolType) {
        self.tool.cancel(&self.settings);
        log::debug!("Switching from {} to {}", self.tool.name(), tool.name());
        self.tool = tool;
        self.request_redraw();
    }

    /// Append a glyph to the palette and return its index.
    ///
    /// The glyph is trimmed; blank input is rejected.
    pub fn add_custom_sticker(&mut self, glyph: &str) -> SketchResult<usize> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("Rejecting empty sticker glyph");
            return Err(SketchError::EmptyGlyph);
        }
        if !GlyphSet::builtin().covers(glyph) {
            log::warn!("Sticker {glyph:?} has characters the built-in fonts lack; they draw as boxes");
        }
        self.stickers.push(glyph.to_owned());
        log::info!("Added sticker {glyph:?}");
        self.request_redraw();
        Ok(self.stickers.len() - 1)
    }

    /// Set the marker hue in degrees; the value wraps into `[0, 360)`.
    ///
    /// Takes effect for strokes started afterwards.
    pub fn set_hue(&mut self, hue: f32) -> SketchResult<()> {
        if !hue.is_finite() {
            log::warn!("Rejecting hue {hue}");
            return Err(SketchError::InvalidHue(hue));
        }
        self.settings.hue = Some(hue.rem_euclid(360.0));
        self.request_redraw();
        Ok(())
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Drop every drawable and the live stroke. Cannot be undone.
    pub fn clear(&mut self) {
        log::info!(
            "Clearing {} drawables ({} undone)",
            self.history.committed().len(),
            self.history.redo_stack().len()
        );
        self.history.clear();
        self.tool.cancel(&self.settings);
        self.request_redraw();
    }

    /// Encode the committed drawables as PNG at the configured scale.
    pub fn export_png(&self) -> SketchResult<Vec<u8>> {
        self.export_png_scaled(self.config.export_scale)
    }

    /// Encode the committed drawables as PNG at `scale`× resolution.
    ///
    /// Neither the model nor the on-screen canvas is touched.
    pub fn export_png_scaled(&self, scale: u32) -> SketchResult<Vec<u8>> {
        export::export_png(&self.history, self.config.canvas_size, scale)
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn canvas_size(&self) -> [u32; 2] {
        self.config.canvas_size
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Pointer position, `NaN` while the pointer is outside the canvas.
    pub fn pointer(&self) -> Pos2 {
        self.pointer
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn is_stamp_mode(&self) -> bool {
        self.tool.is_stamp()
    }

    /// The stroke under construction, if the marker is active.
    pub fn current_stroke(&self) -> Option<&MutableStroke> {
        self.tool.as_marker().map(|marker| marker.current_stroke())
    }

    /// Bumped on every state change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn request_redraw(&mut self) {
        self.version += 1;
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Default for SketchPad {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}
