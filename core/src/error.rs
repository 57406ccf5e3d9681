use thiserror::Error;

use crate::material::TextureSlot;
use crate::property::{PropertyKey, ValueKind};

/// Rejected write through [`PbrMaterial::set`](crate::material::PbrMaterial::set).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("{key} expects a {expected} value, got {found}")]
    TypeMismatch {
        key: PropertyKey,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("no texture linked in {0:?} slot")]
    MissingTexture(TextureSlot),
}
