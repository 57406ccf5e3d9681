//! Minimal publish/subscribe channel.
//!
//! [`Observable`] is the notification primitive the property grid publishes
//! on (property changed, selection changed, texture debug selection). It only
//! needs `&self` to publish, so several widgets can share one channel.
//!
//! Observers run synchronously inside [`Observable::notify_observers`] while
//! the observer list is locked: an observer must not add or remove observers
//! on the same observable.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

type Observer<T> = Box<dyn FnMut(&T) + Send>;

/// Token returned by [`Observable::add`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

pub struct Observable<T> {
    observers: Mutex<Vec<(ObserverHandle, Observer<T>)>>,
    next_id: AtomicU64,
}

impl<T> Observable<T> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Subscribes `observer`; it is called for every later notification.
    pub fn add(&self, observer: impl FnMut(&T) + Send + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((handle, Box::new(observer)));
        handle
    }

    /// Unsubscribes; returns `false` if the handle was not registered.
    pub fn remove(&self, handle: ObserverHandle) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(h, _)| *h != handle);
        observers.len() != before
    }

    /// Calls every observer in subscription order with `event`.
    pub fn notify_observers(&self, event: &T) {
        for (_, observer) in self.observers.lock().iter_mut() {
            observer(event);
        }
    }

    pub fn has_observers(&self) -> bool {
        !self.observers.lock().is_empty()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn clear(&self) {
        self.observers.lock().clear();
    }
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.observer_count())
            .finish()
    }
}
