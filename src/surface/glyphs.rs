use std::sync::OnceLock;

use egui::Pos2;
use tiny_skia::PathBuilder;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Drawn in place of characters no face covers, as egui does on screen.
const REPLACEMENT_CHARS: [char; 2] = ['◻', '?'];

/// A parsed face plus the size tweak egui applies to it.
struct FaceEntry {
    name: &'static str,
    face: Face<'static>,
    /// Visual scale, matching `egui::FontTweak::scale` of the default fonts
    tweak_scale: f32,
}

/// Vertical metrics of one face at a given font size, in canvas units.
///
/// Font size is the ascent-to-descent height, which is how egui sizes text.
struct Metrics {
    /// Canvas units per font unit before the tweak
    unit: f32,
    ascent: f32,
    descent: f32,
    row_height: f32,
}

impl FaceEntry {
    fn metrics(&self, size: f32) -> Metrics {
        let ascender = f32::from(self.face.ascender());
        let descender = f32::from(self.face.descender());
        let unit = size / (ascender - descender);
        let ascent = ascender * unit;
        let descent = descender * unit;
        Metrics {
            unit,
            ascent,
            descent,
            row_height: ascent - descent + f32::from(self.face.line_gap()) * unit,
        }
    }
}

/// Font faces used to outline sticker glyphs for raster output.
///
/// These are egui's default proportional faces, in egui's fallback order and
/// with egui's tweaks, so a sticker has the same size and baseline off screen
/// as it does on screen.
pub struct GlyphSet {
    faces: Vec<FaceEntry>,
}

impl GlyphSet {
    /// The shared set of built-in faces, parsed on first use.
    pub fn builtin() -> &'static GlyphSet {
        static BUILTIN: OnceLock<GlyphSet> = OnceLock::new();
        BUILTIN.get_or_init(Self::load_builtin)
    }

    fn load_builtin() -> Self {
        let sources: [(&'static str, &'static [u8], f32); 3] = [
            ("Ubuntu-Light", epaint_default_fonts::UBUNTU_LIGHT, 1.0),
            ("NotoEmoji-Regular", epaint_default_fonts::NOTO_EMOJI_REGULAR, 0.81),
            ("emoji-icon-font", epaint_default_fonts::EMOJI_ICON, 0.90),
        ];
        let mut faces = Vec::with_capacity(sources.len());
        for (name, data, tweak_scale) in sources {
            match Face::parse(data, 0) {
                Ok(face) => faces.push(FaceEntry {
                    name,
                    face,
                    tweak_scale,
                }),
                Err(err) => log::warn!("Skipping font face {}: {}", name, err),
            }
        }
        Self { faces }
    }

    /// Whether every visible character of `text` has a real glyph.
    ///
    /// Anything else is drawn as a replacement box.
    pub fn covers(&self, text: &str) -> bool {
        text.chars()
            .all(|ch| is_invisible(ch) || self.lookup(ch).is_some())
    }

    fn lookup(&self, ch: char) -> Option<(&FaceEntry, GlyphId)> {
        self.faces
            .iter()
            .find_map(|entry| entry.face.glyph_index(ch).map(|glyph| (entry, glyph)))
    }

    fn resolve(&self, ch: char) -> Option<(&FaceEntry, GlyphId)> {
        self.lookup(ch).or_else(|| {
            log::warn!("No built-in glyph for {ch:?}; drawing a replacement box");
            REPLACEMENT_CHARS
                .into_iter()
                .find_map(|replacement| self.lookup(replacement))
        })
    }

    /// Append the outlines of `text` to `builder`.
    ///
    /// `origin` is the baseline start of the first glyph; later glyphs from
    /// other faces sit where egui's row layout would put them. Returns the
    /// horizontal advance of the laid out text.
    pub fn outline_text(
        &self,
        text: &str,
        origin: Pos2,
        size: f32,
        builder: &mut PathBuilder,
    ) -> f32 {
        let mut pen_x = origin.x;
        // (ascent, row height) of the face the first glyph came from
        let mut first: Option<(f32, f32)> = None;

        for ch in text.chars().filter(|ch| !is_invisible(*ch)) {
            let Some((entry, glyph)) = self.resolve(ch) else {
                continue;
            };
            let metrics = entry.metrics(size);
            let (first_ascent, first_row_height) =
                *first.get_or_insert((metrics.ascent, metrics.row_height));

            // egui centers faces of different heights on the row and
            // shrinks tweaked faces around the middle of their ink height
            let baseline = origin.y + (metrics.ascent - first_ascent)
                - 0.5 * (metrics.row_height - first_row_height);
            let y_offset = -(1.0 - entry.tweak_scale) * 0.5 * (metrics.ascent + metrics.descent);
            let scale = metrics.unit * entry.tweak_scale;

            let mut bridge = PathBridge {
                builder: &mut *builder,
                origin: Pos2::new(pen_x, baseline + y_offset),
                scale,
            };
            // Whitespace has no outline but still advances
            let _ = entry.face.outline_glyph(glyph, &mut bridge);
            let advance = entry.face.glyph_hor_advance(glyph).unwrap_or(0);
            pen_x += f32::from(advance) * scale;
        }
        pen_x - origin.x
    }
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.faces.iter().map(|entry| entry.name))
            .finish()
    }
}

/// Zero-width code points egui never draws.
fn is_invisible(ch: char) -> bool {
    matches!(
        ch,
        '\r' | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
    )
}

/// Feeds font-unit outlines (y up) into a tiny-skia path (y down).
struct PathBridge<'a> {
    builder: &'a mut PathBuilder,
    origin: Pos2,
    scale: f32,
}

impl PathBridge<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin.x + x * self.scale, self.origin.y - y * self.scale)
    }
}

impl OutlineBuilder for PathBridge<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
