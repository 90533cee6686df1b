use crate::SketchApp;
use crate::renderer;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Draw down below");

        let [width, height] = app.pad().canvas_size();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(width as f32, height as f32),
            egui::Sense::click_and_drag(),
        );
        let canvas_rect = response.rect;

        // Input first so this frame already shows its effect
        app.handle_canvas_input(ctx, canvas_rect);

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        renderer::redraw(&mut surface, app.pad());

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
