use egui::Pos2;
use sketchpad::{Command, Drawable, InputEvent, SketchPad, Sticker};

// Helper to draw a stroke through `points` with pointer events
fn draw_stroke(pad: &mut SketchPad, points: &[(f32, f32)]) {
    let points: Vec<Pos2> = points.iter().map(|&(x, y)| Pos2::new(x, y)).collect();
    let (first, rest) = points.split_first().expect("at least one point");
    pad.handle_input(InputEvent::PointerMove { pos: *first });
    pad.handle_input(InputEvent::PointerDown { pos: *first });
    for pos in rest {
        pad.handle_input(InputEvent::PointerMove { pos: *pos });
    }
    let last = rest.last().unwrap_or(first);
    pad.handle_input(InputEvent::PointerUp { pos: *last });
}

fn stamp(pad: &mut SketchPad, index: usize, x: f32, y: f32) {
    pad.execute(Command::SelectSticker(index)).expect("sticker exists");
    pad.handle_input(InputEvent::PointerDown { pos: Pos2::new(x, y) });
    pad.handle_input(InputEvent::PointerUp { pos: Pos2::new(x, y) });
}

#[test]
fn test_three_point_stroke_is_committed_intact() {
    let mut pad = SketchPad::default();
    pad.execute(Command::SelectThickMarker).expect("select");
    draw_stroke(&mut pad, &[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    let stroke = committed[0].as_stroke().expect("a stroke");
    assert_eq!(
        stroke.points(),
        &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0), Pos2::new(30.0, 10.0)]
    );
    assert_eq!(stroke.thickness(), 5.0);
    assert_eq!(stroke.color(), egui::Color32::BLACK);
    assert!(pad.history().redo_stack().is_empty());
}

#[test]
fn test_stamping_commits_a_sticker_at_the_pointer() {
    let mut pad = SketchPad::default();
    stamp(&mut pad, 0, 50.0, 50.0);

    assert_eq!(
        pad.history().committed(),
        &[Drawable::Sticker(Sticker::new(Pos2::new(50.0, 50.0), "😎", 24.0))]
    );
    // Releasing does not add anything else
    assert!(pad.current_stroke().is_none());
}

#[test]
fn test_undo_then_redo_restores_the_sequence() {
    let mut pad = SketchPad::default();
    draw_stroke(&mut pad, &[(1.0, 1.0), (2.0, 2.0)]);
    stamp(&mut pad, 1, 10.0, 10.0);
    pad.execute(Command::SelectThinMarker).expect("select");
    draw_stroke(&mut pad, &[(3.0, 3.0), (4.0, 4.0)]);

    let before = pad.history().committed().to_vec();
    for n in 1..=before.len() {
        for _ in 0..n {
            assert!(pad.undo());
        }
        assert_eq!(pad.history().committed(), &before[..before.len() - n]);
        for _ in 0..n {
            assert!(pad.redo());
        }
        assert_eq!(pad.history().committed(), before.as_slice());
        assert!(pad.history().redo_stack().is_empty());
    }
}

#[test]
fn test_undo_is_kind_agnostic() {
    let mut pad = SketchPad::default();
    draw_stroke(&mut pad, &[(1.0, 1.0), (2.0, 2.0)]);
    stamp(&mut pad, 2, 5.0, 5.0);

    pad.execute(Command::Undo).expect("undo");
    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    assert!(committed[0].as_stroke().is_some());
    assert!(pad.history().redo_stack()[0].as_sticker().is_some());
}

#[test]
fn test_fresh_edit_discards_redo() {
    let mut pad = SketchPad::default();
    draw_stroke(&mut pad, &[(1.0, 1.0), (2.0, 2.0)]);
    draw_stroke(&mut pad, &[(3.0, 3.0), (4.0, 4.0)]);
    pad.undo();
    assert!(pad.history().can_redo());

    draw_stroke(&mut pad, &[(5.0, 5.0), (6.0, 6.0)]);
    assert!(!pad.history().can_redo());
    assert!(!pad.redo());
    assert_eq!(pad.history().committed().len(), 2);
}

#[test]
fn test_undo_and_redo_on_empty_history_are_no_ops() {
    let mut pad = SketchPad::default();
    pad.take_redraw_request();
    assert!(pad.execute(Command::Undo).is_ok());
    assert!(pad.execute(Command::Redo).is_ok());
    assert!(pad.history().committed().is_empty());
    assert!(pad.history().redo_stack().is_empty());
    assert!(!pad.take_redraw_request());
}

#[test]
fn test_clear_is_irreversible() {
    let mut pad = SketchPad::default();
    for i in 0..5 {
        let x = i as f32 * 10.0;
        draw_stroke(&mut pad, &[(x, x), (x + 5.0, x + 5.0)]);
    }
    pad.undo();
    pad.undo();
    assert_eq!(pad.history().committed().len(), 3);
    assert_eq!(pad.history().redo_stack().len(), 2);

    pad.execute(Command::Clear).expect("clear");
    assert!(pad.history().committed().is_empty());
    assert!(pad.history().redo_stack().is_empty());
    assert!(!pad.undo());
    assert!(!pad.redo());
}

#[test]
fn test_clear_drops_the_stroke_in_progress() {
    let mut pad = SketchPad::default();
    pad.handle_input(InputEvent::PointerDown { pos: Pos2::new(1.0, 1.0) });
    pad.handle_input(InputEvent::PointerMove { pos: Pos2::new(2.0, 2.0) });
    pad.clear();
    pad.handle_input(InputEvent::PointerUp { pos: Pos2::new(2.0, 2.0) });
    assert!(pad.history().committed().is_empty());
}

#[test]
fn test_hue_only_colors_later_strokes() {
    let mut pad = SketchPad::default();
    draw_stroke(&mut pad, &[(1.0, 1.0), (2.0, 2.0)]);
    pad.execute(Command::SetHue(120.0)).expect("hue");
    draw_stroke(&mut pad, &[(3.0, 3.0), (4.0, 4.0)]);

    let committed = pad.history().committed();
    assert_eq!(committed[0].as_stroke().map(|s| s.color()), Some(egui::Color32::BLACK));
    assert_eq!(
        committed[1].as_stroke().map(|s| s.color()),
        Some(egui::Color32::from_rgb(64, 191, 64))
    );
}

#[test]
fn test_custom_sticker_can_be_stamped() {
    let mut pad = SketchPad::default();
    pad.execute(Command::AddCustomSticker(" ⭐ ".to_owned())).expect("add");
    assert!(!pad.is_stamp_mode());
    stamp(&mut pad, 3, 7.0, 8.0);
    let sticker = pad.history().committed()[0].as_sticker().expect("a sticker");
    assert_eq!(sticker.glyph(), "⭐");
    assert_eq!(sticker.position(), Pos2::new(7.0, 8.0));
}
