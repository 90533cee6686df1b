#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod download;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{Command, CommandResult};
pub use config::SketchConfig;
pub use drawable::{Drawable, MutableStroke, Sticker, Stroke};
pub use error::{SketchError, SketchResult};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use state::SketchPad;
pub use surface::{PixmapSurface, RecordingSurface, Surface};
pub use tools::{Tool, ToolSettings, ToolType};
