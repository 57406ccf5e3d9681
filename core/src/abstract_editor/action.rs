//! Reversible edits (Command pattern).

use std::any::Any;
use std::fmt;

/// Downcasting helper used by [`EditAction::merge`].
pub trait AsAny: 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marker for objects that edit actions operate on.
pub trait Editable: 'static {}

/// Why an action could not be applied or undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditActionError {
    /// The target is in a state the action cannot handle (e.g. the texture
    /// whose level it edits was unlinked).
    InvalidState(String),
    /// Undo or redo requested with an empty stack.
    NothingToUndo,
    NothingToRedo,
}

impl fmt::Display for EditActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            Self::NothingToUndo => f.write_str("nothing to undo"),
            Self::NothingToRedo => f.write_str("nothing to redo"),
        }
    }
}

impl std::error::Error for EditActionError {}

pub type EditActionResult<T = ()> = Result<T, EditActionError>;

/// A single undoable edit.
///
/// Each action stores whatever it needs to go both ways. The trait is
/// dyn-compatible so that different action types share one history stack.
pub trait EditAction<T: Editable>: fmt::Debug + AsAny + Send {
    /// Forward (and redo) direction.
    fn apply(&mut self, target: &mut T) -> EditActionResult;

    /// Restores the target to its state before [`apply`](Self::apply).
    fn undo(&mut self, target: &mut T) -> EditActionResult;

    /// Short label for the history panel, e.g. `"Set material.roughness"`.
    fn description(&self) -> &str;

    /// Absorbs `other` into `self` when both describe one continuous edit.
    ///
    /// Returns `None` when `other` was consumed, `Some(other)` otherwise.
    fn merge(&mut self, other: Box<dyn EditAction<T>>) -> Option<Box<dyn EditAction<T>>> {
        Some(other)
    }

    /// Whether the action changes document content (and so moves the
    /// target away from its saved state).
    fn modifies_content(&self) -> bool {
        true
    }
}
