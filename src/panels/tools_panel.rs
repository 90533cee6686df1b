use crate::SketchApp;
use crate::command::Command;
use crate::components::ToolButton;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Marker presets
            ui.horizontal(|ui| {
                let pad = app.pad();
                let marker_thickness = (!pad.is_stamp_mode()).then(|| pad.settings().thickness);
                let thin = marker_thickness == Some(pad.config().thin_thickness);
                let thick = marker_thickness == Some(pad.config().thick_thickness);

                if ui.selectable_label(thin, "Thin").clicked() {
                    app.run(Command::SelectThinMarker);
                }
                if ui.selectable_label(thick, "Thick").clicked() {
                    app.run(Command::SelectThickMarker);
                }
            });
            ui.separator();

            ui.label("Stickers");
            let selected = app
                .pad()
                .is_stamp_mode()
                .then(|| app.pad().settings().sticker.clone());
            let stickers = app.pad().stickers().to_vec();
            ui.horizontal_wrapped(|ui| {
                for (index, glyph) in stickers.iter().enumerate() {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ToolButton::new(glyph, is_selected).show(ui).clicked() {
                        log::info!("Sticker selected from UI: {glyph}");
                        app.run(Command::SelectSticker(index));
                    }
                }
            });

            ui.horizontal(|ui| {
                let entry = ui.add(
                    egui::TextEdit::singleline(app.custom_sticker_mut())
                        .hint_text("Custom sticker")
                        .desired_width(100.0),
                );
                let submitted =
                    entry.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    app.add_custom_sticker();
                }
            });
            ui.separator();

            let hue = app.hue_mut();
            let changed = ui
                .add(egui::Slider::new(hue, 0.0..=360.0).text("Adjust hue"))
                .changed();
            if changed {
                let hue = *app.hue_mut();
                app.run(Command::SetHue(hue));
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.pad().history().can_undo();
                let can_redo = app.pad().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.run(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.run(Command::Redo);
                }
                if ui.button("Clear").clicked() {
                    app.run(Command::Clear);
                }
            });

            ui.separator();
            if ui.button("Export").clicked() {
                app.export();
            }

            let history = app.pad().history();
            ui.label(format!(
                "{} drawn, {} undone",
                history.committed().len(),
                history.redo_stack().len()
            ));
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
