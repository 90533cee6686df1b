//! Offscreen export of the committed scene.

use crate::error::SketchResult;
use crate::history::History;
use crate::renderer;
use crate::surface::PixmapSurface;

/// Rasterize the committed drawables at `scale`× the canvas resolution.
///
/// The live stroke, cursor ring and stamp ghost are never part of an export.
pub fn render_scaled(
    history: &History,
    canvas_size: [u32; 2],
    scale: u32,
) -> SketchResult<PixmapSurface> {
    let [width, height] = canvas_size;
    let mut surface = PixmapSurface::new(width, height, scale)?;
    renderer::redraw_committed(&mut surface, history);
    Ok(surface)
}

/// Rasterize and encode the committed drawables as PNG.
pub fn export_png(history: &History, canvas_size: [u32; 2], scale: u32) -> SketchResult<Vec<u8>> {
    let surface = render_scaled(history, canvas_size, scale)?;
    let png = surface.encode_png()?;
    let [width, height] = surface.pixel_size();
    log::info!(
        "Exported {} drawables at {}x ({}x{} px)",
        history.committed().len(),
        scale,
        width,
        height
    );
    Ok(png)
}
