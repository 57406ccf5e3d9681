//! Statically-typed property schema for [`PbrMaterial`](crate::material::PbrMaterial).
//!
//! Every editable field is named by a [`PropertyKey`] instead of a string, so
//! a misspelled field name is a compile error rather than a silent no-op.
//!
//! - [`PropertyKey`] — field identity, owning [`PropertyTarget`], wire name, [`ValueKind`]
//! - [`PropertyValue`] — dynamically-typed value moved through the grid
//! - [`PropertyChangedEvent`] — published once per committed edit
//! - [`SetPropertyAction`] — the same edit as an undoable action

mod access;
mod action;
mod event;
mod key;
mod value;

pub use action::SetPropertyAction;
pub use event::PropertyChangedEvent;
pub use key::{PropertyKey, PropertyTarget, ValueKind};
pub use value::PropertyValue;
