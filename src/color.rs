//! Marker colors.

use egui::Color32;

/// Color of strokes drawn before any hue has been picked.
pub const DEFAULT_MARKER_COLOR: Color32 = Color32::BLACK;

/// Saturation and lightness used for hue-selected markers.
pub const MARKER_SATURATION: f32 = 0.5;
pub const MARKER_LIGHTNESS: f32 = 0.5;

/// Marker color for a hue in degrees, i.e. `hsl(hue, 50%, 50%)`.
pub fn marker_color(hue: f32) -> Color32 {
    hsl(hue, MARKER_SATURATION, MARKER_LIGHTNESS)
}

/// Converts an HSL triple to an opaque color.
///
/// `hue` is in degrees and wraps around; `saturation` and `lightness` are in
/// the range 0.0 to 1.0.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let sector = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    Color32::from_rgb(channel(r + m), channel(g + m), channel(b + m))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
