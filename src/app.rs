use egui::{Key, KeyboardShortcut, Modifiers};

use crate::command::Command;
use crate::config::SketchConfig;
use crate::download::offer_download;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::SketchPad;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// eframe host of a [`SketchPad`].
pub struct SketchApp {
    pad: SketchPad,
    input: InputHandler,
    /// Text of the custom sticker entry
    custom_sticker: String,
    /// Slider position; the pad stores the wrapped hue
    hue: f32,
    /// Outcome of the last failed command or export
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(SketchConfig::load_from_env())
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            pad: SketchPad::new(config),
            input: InputHandler::new(egui::Rect::NOTHING),
            custom_sticker: String::new(),
            hue: 0.0,
            status: None,
        }
    }

    pub fn pad(&self) -> &SketchPad {
        &self.pad
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn custom_sticker_mut(&mut self) -> &mut String {
        &mut self.custom_sticker
    }

    pub(crate) fn hue_mut(&mut self) -> &mut f32 {
        &mut self.hue
    }

    /// Execute a command, surfacing failures in the status line.
    pub fn run(&mut self, command: Command) {
        match self.pad.execute(command) {
            Ok(()) => self.status = None,
            Err(err) => {
                log::warn!("Command failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Add the text of the custom sticker entry to the palette.
    pub fn add_custom_sticker(&mut self) {
        let glyph = std::mem::take(&mut self.custom_sticker);
        self.run(Command::AddCustomSticker(glyph));
    }

    /// Export the committed drawables and hand the PNG to the user.
    pub fn export(&mut self) {
        let config = self.pad.config();
        let result = self.pad.export_png().and_then(|png| {
            offer_download(&png, &config.export_file_name, &config.export_dir)
        });
        match result {
            Ok(path) => self.status = Some(format!("Exported {}", path.display())),
            Err(err) => {
                log::error!("Export failed: {err}");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    /// Route this frame's pointer input over `canvas_rect` to the pad.
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.pad.handle_input(event);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // Redo first: the undo shortcut also matches with shift held
        let redo = ctx.input_mut(|input| {
            input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT)
        });
        if redo {
            self.run(Command::Redo);
        } else if ctx.input_mut(|input| input.consume_shortcut(&UNDO)) {
            self.run(Command::Undo);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if self.pad.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
