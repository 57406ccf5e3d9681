//! Bounded undo/redo stack.

use std::collections::VecDeque;
use std::fmt;

use super::action::{EditAction, EditActionError, EditActionResult, Editable};

pub const DEFAULT_MAX_UNDO: usize = 100;

/// Linear undo/redo history of [`EditAction`]s.
///
/// Pushing a new action clears the redo stack. When the undo stack grows past
/// `max_undo` the oldest entry is dropped.
pub struct EditActionHistory<T: Editable> {
    undo_stack: VecDeque<Box<dyn EditAction<T>>>,
    redo_stack: Vec<Box<dyn EditAction<T>>>,
    max_undo: usize,
    /// Undo steps between the current state and the last save.
    /// Negative means redo steps; `None` means the save point is unreachable.
    save_distance: Option<i64>,
}

impl<T: Editable> EditActionHistory<T> {
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo,
            save_distance: Some(0),
        }
    }

    /// Applies `action` and records it, merging into the previous entry when
    /// the previous entry accepts it. A failed action is not recorded.
    pub fn execute(
        &mut self,
        mut action: Box<dyn EditAction<T>>,
        target: &mut T,
    ) -> EditActionResult {
        action.apply(target)?;
        let is_content = action.modifies_content();

        self.redo_stack.clear();
        if is_content && matches!(self.save_distance, Some(d) if d < 0) {
            self.save_distance = None;
        }

        if let Some(last) = self.undo_stack.back_mut() {
            match last.merge(action) {
                None => {
                    if is_content && self.save_distance == Some(0) {
                        self.save_distance = None;
                    }
                    return Ok(());
                }
                Some(returned) => action = returned,
            }
        }

        if is_content && let Some(d) = &mut self.save_distance {
            *d += 1;
        }
        self.push_undo(action);
        Ok(())
    }

    pub fn undo(&mut self, target: &mut T) -> EditActionResult {
        let mut action = self
            .undo_stack
            .pop_back()
            .ok_or(EditActionError::NothingToUndo)?;
        if let Err(e) = action.undo(target) {
            self.undo_stack.push_back(action);
            return Err(e);
        }
        if action.modifies_content()
            && let Some(d) = &mut self.save_distance
        {
            *d -= 1;
        }
        self.redo_stack.push(action);
        Ok(())
    }

    pub fn redo(&mut self, target: &mut T) -> EditActionResult {
        let mut action = self
            .redo_stack
            .pop()
            .ok_or(EditActionError::NothingToRedo)?;
        if let Err(e) = action.apply(target) {
            self.redo_stack.push(action);
            return Err(e);
        }
        if action.modifies_content()
            && let Some(d) = &mut self.save_distance
        {
            *d += 1;
        }
        self.push_undo(action);
        Ok(())
    }

    fn push_undo(&mut self, action: Box<dyn EditAction<T>>) {
        self.undo_stack.push_back(action);
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
            if matches!(self.save_distance, Some(d) if d > self.undo_stack.len() as i64) {
                self.save_distance = None;
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo entries, most recent first.
    pub fn undo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().rev().map(|a| a.description())
    }

    /// Redo entries, next-to-redo first.
    pub fn redo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.redo_stack.iter().rev().map(|a| a.description())
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn mark_saved(&mut self) {
        self.save_distance = Some(0);
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.save_distance != Some(0)
    }

    /// Drops both stacks. The saved state survives only if it is the current one.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        if self.save_distance != Some(0) {
            self.save_distance = None;
        }
    }
}

impl<T: Editable> Default for EditActionHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

impl<T: Editable> fmt::Debug for EditActionHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditActionHistory")
            .field("undo_count", &self.undo_stack.len())
            .field("redo_count", &self.redo_stack.len())
            .field("max_undo", &self.max_undo)
            .field("save_distance", &self.save_distance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slider {
        value: i32,
    }

    impl Editable for Slider {}

    /// Mergeable absolute write, like a slider drag.
    #[derive(Debug)]
    struct Drag {
        old: i32,
        new: i32,
    }

    impl EditAction<Slider> for Drag {
        fn apply(&mut self, target: &mut Slider) -> EditActionResult {
            target.value = self.new;
            Ok(())
        }

        fn undo(&mut self, target: &mut Slider) -> EditActionResult {
            target.value = self.old;
            Ok(())
        }

        fn description(&self) -> &str {
            "Drag"
        }

        fn merge(
            &mut self,
            other: Box<dyn EditAction<Slider>>,
        ) -> Option<Box<dyn EditAction<Slider>>> {
            if let Some(other) = other.as_any().downcast_ref::<Drag>() {
                self.new = other.new;
                return None;
            }
            Some(other)
        }
    }

    #[derive(Debug)]
    struct Step(i32);

    impl EditAction<Slider> for Step {
        fn apply(&mut self, target: &mut Slider) -> EditActionResult {
            target.value += self.0;
            Ok(())
        }

        fn undo(&mut self, target: &mut Slider) -> EditActionResult {
            target.value -= self.0;
            Ok(())
        }

        fn description(&self) -> &str {
            "Step"
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl EditAction<Slider> for Broken {
        fn apply(&mut self, _target: &mut Slider) -> EditActionResult {
            Err(EditActionError::InvalidState("broken".into()))
        }

        fn undo(&mut self, _target: &mut Slider) -> EditActionResult {
            Ok(())
        }

        fn description(&self) -> &str {
            "Broken"
        }
    }

    #[test]
    fn execute_undo_redo() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        history.execute(Box::new(Step(3)), &mut slider).unwrap();
        history.execute(Box::new(Step(4)), &mut slider).unwrap();
        assert_eq!(slider.value, 7);

        history.undo(&mut slider).unwrap();
        assert_eq!(slider.value, 3);
        assert!(history.can_redo());

        history.redo(&mut slider).unwrap();
        assert_eq!(slider.value, 7);
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_report_errors() {
        let mut history = EditActionHistory::<Slider>::default();
        let mut slider = Slider { value: 0 };
        assert_eq!(history.undo(&mut slider), Err(EditActionError::NothingToUndo));
        assert_eq!(history.redo(&mut slider), Err(EditActionError::NothingToRedo));
    }

    #[test]
    fn new_action_clears_redo() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        history.execute(Box::new(Step(1)), &mut slider).unwrap();
        history.undo(&mut slider).unwrap();
        history.execute(Box::new(Step(5)), &mut slider).unwrap();
        assert_eq!(history.redo_count(), 0);
        assert_eq!(slider.value, 5);
    }

    #[test]
    fn drags_merge_into_one_entry() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        for (old, new) in [(0, 10), (10, 20), (20, 30)] {
            history
                .execute(Box::new(Drag { old, new }), &mut slider)
                .unwrap();
        }
        assert_eq!(history.undo_count(), 1);
        history.undo(&mut slider).unwrap();
        assert_eq!(slider.value, 0);
    }

    #[test]
    fn failed_action_is_not_recorded() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        assert!(history.execute(Box::new(Broken), &mut slider).is_err());
        assert!(!history.can_undo());
        assert!(!history.has_unsaved_changes());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = EditActionHistory::new(2);
        let mut slider = Slider { value: 0 };
        for _ in 0..3 {
            history.execute(Box::new(Step(1)), &mut slider).unwrap();
        }
        assert_eq!(history.undo_count(), 2);
        history.undo(&mut slider).unwrap();
        history.undo(&mut slider).unwrap();
        assert_eq!(slider.value, 1);
        // The save point was the dropped initial state.
        assert!(history.has_unsaved_changes());
    }

    #[test]
    fn save_point_tracking() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        assert!(!history.has_unsaved_changes());

        history.execute(Box::new(Step(1)), &mut slider).unwrap();
        assert!(history.has_unsaved_changes());
        history.mark_saved();
        assert!(!history.has_unsaved_changes());

        history.undo(&mut slider).unwrap();
        assert!(history.has_unsaved_changes());
        history.redo(&mut slider).unwrap();
        assert!(!history.has_unsaved_changes());
    }

    #[test]
    fn merge_into_saved_entry_dirties() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        history
            .execute(Box::new(Drag { old: 0, new: 1 }), &mut slider)
            .unwrap();
        history.mark_saved();
        history
            .execute(Box::new(Drag { old: 1, new: 2 }), &mut slider)
            .unwrap();
        assert!(history.has_unsaved_changes());
    }

    #[test]
    fn clear_keeps_clean_state() {
        let mut history = EditActionHistory::new(DEFAULT_MAX_UNDO);
        let mut slider = Slider { value: 0 };
        history.execute(Box::new(Step(1)), &mut slider).unwrap();
        history.mark_saved();
        history.clear();
        assert!(!history.has_unsaved_changes());
        assert!(!history.can_undo());
    }
}
