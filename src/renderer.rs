//! The redraw pipeline.
//!
//! Both functions are read-only over the model: the same state always
//! produces the same sequence of surface calls.

use crate::history::History;
use crate::state::SketchPad;
use crate::surface::Surface;
use crate::tools::Tool;

/// Repaint the whole canvas: committed drawables, then the live overlay.
///
/// Args:
///     surface: Where to paint; cleared first
///     pad: The state to paint
pub fn redraw(surface: &mut dyn Surface, pad: &SketchPad) {
    redraw_committed(surface, pad.history());
    pad.tool()
        .render_preview(surface, pad.pointer(), pad.settings());
}

/// Repaint only the committed drawables, oldest first. Used by export.
pub fn redraw_committed(surface: &mut dyn Surface, history: &History) {
    surface.clear();
    for drawable in history.committed() {
        drawable.render(surface);
    }
}
