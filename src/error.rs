use thiserror::Error;

/// Errors that can occur while editing or exporting a sketch.
///
/// Undo and redo on an empty stack are not errors; they are reported as
/// no-ops by the history.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("export scale factor must be a positive integer, got {0}")]
    InvalidScaleFactor(u32),

    #[error("cannot allocate a {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("no sticker at index {index} (palette has {len})")]
    UnknownSticker { index: usize, len: usize },

    #[error("sticker glyph must not be empty")]
    EmptyGlyph,

    #[error("hue must be a finite number, got {0}")]
    InvalidHue(f32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download failed: {0}")]
    Download(String),
}

/// Result type used throughout the crate
pub type SketchResult<T> = Result<T, SketchError>;
