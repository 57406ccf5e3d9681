//! # matgrid core
//!
//! UI-independent pieces of the PBR material property grid: the material
//! object model, the typed property schema, change notifications, the shared
//! edit lock, the shader debug-mode table and undo/redo history.

pub mod abstract_editor;
pub mod debug_mode;
pub mod error;
pub mod lock;
pub mod material;
pub mod math;
pub mod observable;
pub mod property;

pub use error::PropertyError;
pub use lock::LockObject;
pub use observable::{ObserverHandle, Observable};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
