use egui::{Color32, Pos2};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use super::{GlyphSet, StrokeStyle, Surface};
use crate::error::{SketchError, SketchResult};

/// Offscreen raster surface.
///
/// The pixmap is `scale` times larger than the logical canvas in both
/// directions and every drawing call goes through a uniform `scale`
/// transform, so drawables are rasterized at full resolution rather than
/// upscaled afterwards.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    glyphs: &'static GlyphSet,
}

impl PixmapSurface {
    /// Allocate a transparent surface for a `width` x `height` canvas
    /// magnified `scale` times.
    pub fn new(width: u32, height: u32, scale: u32) -> SketchResult<Self> {
        if scale == 0 {
            return Err(SketchError::InvalidScaleFactor(scale));
        }
        let allocation_error = SketchError::SurfaceAllocation {
            width: width.saturating_mul(scale),
            height: height.saturating_mul(scale),
        };
        let (Some(pixel_width), Some(pixel_height)) =
            (width.checked_mul(scale), height.checked_mul(scale))
        else {
            return Err(allocation_error);
        };
        let pixmap = Pixmap::new(pixel_width, pixel_height).ok_or(allocation_error)?;
        Ok(Self {
            pixmap,
            transform: Transform::from_scale(scale as f32, scale as f32),
            glyphs: GlyphSet::builtin(),
        })
    }

    /// Pixel size of the backing raster.
    pub fn pixel_size(&self) -> [u32; 2] {
        [self.pixmap.width(), self.pixmap.height()]
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Alpha of the pixel at raster coordinates (`x`, `y`).
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|pixel| pixel.alpha())
    }

    /// Encode the raster as a PNG file.
    pub fn encode_png(&self) -> SketchResult<Vec<u8>> {
        let [width, height] = self.pixel_size();
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        let image = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or(SketchError::SurfaceAllocation { width, height })?;

        let mut bytes = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        log::debug!("Encoded {}x{} PNG ({} bytes)", width, height, bytes.len());
        Ok(bytes)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
        paint.anti_alias = true;
        paint
    }

    fn stroke(style: StrokeStyle) -> Stroke {
        Stroke {
            width: style.width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
    }
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        // A lone move_to yields no path
        let Some(path) = builder.finish() else {
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(style.color),
            &Self::stroke(style),
            self.transform,
            None,
        );
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: StrokeStyle) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(style.color),
            &Self::stroke(style),
            self.transform,
            None,
        );
    }

    fn fill_glyph(&mut self, anchor: Pos2, glyph: &str, size: f32, color: Color32) {
        let mut builder = PathBuilder::new();
        self.glyphs.outline_text(glyph, anchor, size, &mut builder);
        let Some(path) = builder.finish() else {
            log::warn!("Sticker {:?} has no outline to fill", glyph);
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            self.transform,
            None,
        );
    }
}
