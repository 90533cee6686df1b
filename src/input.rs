use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas coordinates (origin at the canvas' top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas, pressed or not
    PointerMove { pos: Pos2 },
    /// Primary button released over the canvas
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Snapshot of the raw pointer state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    /// Pointer position in screen coordinates, if it is over the window
    pub hover_pos: Option<Pos2>,
    /// Where the primary button went down, in screen coordinates
    pub press_origin: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerFrame {
    /// Read the primary-button pointer state of the current frame.
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            press_origin: input.pointer.press_origin(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Converts raw egui pointer input into canvas [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    /// Last canvas position seen while the pointer was inside
    last_inside: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_inside: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if the layout moved it)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Process this frame's egui input.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process_frame(PointerFrame::from_context(ctx))
    }

    fn to_canvas(&self, screen_pos: Pos2) -> Option<Pos2> {
        self.canvas_rect
            .contains(screen_pos)
            .then(|| screen_pos - self.canvas_rect.min.to_vec2())
    }

    /// Translate one pointer frame; events come out as move, down, up.
    ///
    /// A press is reported where the button went down. If the pointer has
    /// already moved on within the frame, the move follows the press.
    pub fn process_frame(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = frame.hover_pos.and_then(|pos| self.to_canvas(pos));

        match inside {
            Some(pos) => {
                let press = if frame.pressed {
                    // A press that began outside the canvas is not ours
                    frame
                        .press_origin
                        .map_or(Some(pos), |origin| self.to_canvas(origin))
                } else {
                    None
                };
                match press {
                    Some(origin) if origin != pos => {
                        events.push(InputEvent::PointerDown { pos: origin });
                        events.push(InputEvent::PointerMove { pos });
                    }
                    _ => {
                        if self.last_inside != Some(pos) {
                            events.push(InputEvent::PointerMove { pos });
                        }
                        if press.is_some() {
                            events.push(InputEvent::PointerDown { pos });
                        }
                    }
                }
                if frame.released {
                    events.push(InputEvent::PointerUp { pos });
                }
            }
            None => {
                if self.last_inside.is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        self.last_inside = inside;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(256.0, 256.0)))
    }

    fn frame(x: f32, y: f32) -> PointerFrame {
        PointerFrame {
            hover_pos: Some(Pos2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn positions_are_relative_to_the_canvas() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            pressed: true,
            ..frame(110.0, 60.0)
        });
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos: Pos2::new(10.0, 10.0) },
                InputEvent::PointerDown { pos: Pos2::new(10.0, 10.0) },
            ]
        );
    }

    #[test]
    fn stationary_pointer_emits_nothing() {
        let mut input = handler();
        input.process_frame(frame(120.0, 70.0));
        assert!(input.process_frame(frame(120.0, 70.0)).is_empty());
    }

    #[test]
    fn click_in_one_frame_is_down_then_up() {
        let mut input = handler();
        input.process_frame(frame(120.0, 70.0));
        let events = input.process_frame(PointerFrame {
            pressed: true,
            released: true,
            ..frame(120.0, 70.0)
        });
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: Pos2::new(20.0, 20.0) },
                InputEvent::PointerUp { pos: Pos2::new(20.0, 20.0) },
            ]
        );
    }

    #[test]
    fn leaving_the_canvas_is_reported_once() {
        let mut input = handler();
        input.process_frame(frame(120.0, 70.0));
        assert_eq!(input.process_frame(frame(10.0, 10.0)), vec![InputEvent::PointerLeave]);
        assert!(input.process_frame(frame(10.0, 10.0)).is_empty());
        assert!(input.process_frame(PointerFrame::default()).is_empty());
    }

    #[test]
    fn press_outside_the_canvas_is_ignored() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            pressed: true,
            ..frame(5.0, 5.0)
        });
        assert!(events.is_empty());
    }

    #[test]
    fn press_is_reported_at_its_origin() {
        let mut input = handler();
        input.process_frame(frame(110.0, 60.0));
        let events = input.process_frame(PointerFrame {
            press_origin: Some(Pos2::new(112.0, 62.0)),
            pressed: true,
            ..frame(130.0, 80.0)
        });
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: Pos2::new(12.0, 12.0) },
                InputEvent::PointerMove { pos: Pos2::new(30.0, 30.0) },
            ]
        );
    }

    #[test]
    fn drag_in_from_outside_does_not_press() {
        let mut input = handler();
        let events = input.process_frame(PointerFrame {
            press_origin: Some(Pos2::new(5.0, 5.0)),
            pressed: true,
            ..frame(120.0, 70.0)
        });
        assert_eq!(events, vec![InputEvent::PointerMove { pos: Pos2::new(20.0, 20.0) }]);
    }
}
