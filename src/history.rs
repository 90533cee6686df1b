use crate::drawable::Drawable;

/// Committed drawables plus the redo stack of undone ones.
///
/// A drawable lives in exactly one of the two stacks. Undo and redo move the
/// most recent entry between them; they do not care whether it is a stroke or
/// a sticker.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Everything currently visible, oldest first
    committed: Vec<Drawable>,
    /// Drawables removed by undo, most recently undone last
    redo: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a brand-new drawable.
    ///
    /// Any redo history is discarded: it is only valid right after an undo.
    pub fn commit(&mut self, drawable: impl Into<Drawable>) {
        let drawable = drawable.into();
        log::debug!(
            "Committing {} #{}",
            drawable.kind(),
            self.committed.len() + 1
        );
        self.committed.push(drawable);
        if !self.redo.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo.len());
            self.redo.clear();
        }
    }

    /// Move the newest committed drawable onto the redo stack.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let moved = move_last(&mut self.committed, &mut self.redo);
        if !moved {
            log::debug!("Nothing to undo");
        }
        moved
    }

    /// Move the most recently undone drawable back into the committed list.
    ///
    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let moved = move_last(&mut self.redo, &mut self.committed);
        if !moved {
            log::debug!("Nothing to redo");
        }
        moved
    }

    /// Drop both stacks. Not undoable.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

fn move_last(from: &mut Vec<Drawable>, to: &mut Vec<Drawable>) -> bool {
    match from.pop() {
        Some(drawable) => {
            to.push(drawable);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{Sticker, Stroke};
    use egui::{Color32, Pos2};

    fn stroke(x: f32) -> Drawable {
        Stroke::new(Color32::BLACK, 1.0, vec![Pos2::new(x, x), Pos2::new(x + 1.0, x)]).into()
    }

    fn sticker(x: f32) -> Drawable {
        Sticker::new(Pos2::new(x, x), "😐", 24.0).into()
    }

    #[test]
    fn undo_on_empty_is_a_no_op() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn undo_redo_is_chronological_across_kinds() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.commit(sticker(2.0));
        history.commit(stroke(3.0));

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.committed(), &[stroke(1.0)]);
        assert_eq!(history.redo_stack(), &[stroke(3.0), sticker(2.0)]);

        assert!(history.redo());
        assert_eq!(history.committed(), &[stroke(1.0), sticker(2.0)]);
    }

    #[test]
    fn commit_clears_redo() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.undo();
        assert!(history.can_redo());

        history.commit(sticker(5.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.committed(), &[sticker(5.0)]);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        for i in 0..5 {
            history.commit(stroke(i as f32));
        }
        history.undo();
        history.undo();
        history.clear();
        assert!(history.committed().is_empty());
        assert!(history.redo_stack().is_empty());
        assert!(!history.undo());
        assert!(!history.redo());
    }

    #[test]
    fn each_drawable_lives_in_exactly_one_stack() {
        let mut history = History::new();
        for i in 0..4 {
            history.commit(stroke(i as f32));
        }
        history.undo();
        history.undo();
        history.redo();
        let total = history.committed().len() + history.redo_stack().len();
        assert_eq!(total, 4);
        for drawable in history.committed() {
            assert!(!history.redo_stack().contains(drawable));
        }
    }
}
