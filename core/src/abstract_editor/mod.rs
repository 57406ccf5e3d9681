//! Undo/redo building blocks.
//!
//! - [`Editable`] — marker for edit targets
//! - [`EditAction`] — one reversible edit (Command pattern)
//! - [`EditActionHistory`] — bounded undo/redo stack with save-point tracking
//!
//! Property-grid edits become [`SetPropertyAction`](crate::property::SetPropertyAction)s
//! on a [`PbrMaterial`](crate::material::PbrMaterial).

mod action;
mod history;

pub use action::{AsAny, EditAction, EditActionError, EditActionResult, Editable};
pub use history::{DEFAULT_MAX_UNDO, EditActionHistory};
