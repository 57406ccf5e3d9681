//! Shared edit lock.
//!
//! While a text field in the inspector has keyboard focus it holds the lock,
//! and the host suppresses its keyboard shortcuts (undo, save, ...), so that
//! typing a material name does not trigger them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cheaply clonable handle to one lock flag.
#[derive(Debug, Clone, Default)]
pub struct LockObject {
    locked: Arc<AtomicBool>,
}

impl LockObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    pub fn set_locked(&self, locked: bool) {
        self.locked.store(locked, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let lock = LockObject::new();
        let host_view = lock.clone();
        assert!(!host_view.is_locked());
        lock.set_locked(true);
        assert!(host_view.is_locked());
        lock.set_locked(false);
        assert!(!host_view.is_locked());
    }
}
