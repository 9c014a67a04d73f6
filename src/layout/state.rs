//! Replace-only shared state cell.
//!
//! Option descriptors hold a handle to the settings of the layout that
//! produced them. Reads return a snapshot; writes swap in a whole new value,
//! so a reader never observes a half-updated state.

use std::sync::{Arc, RwLock};

/// Shared value updated only by wholesale replacement.
#[derive(Debug, Default)]
pub struct SharedState<T> {
    inner: Arc<RwLock<Arc<T>>>,
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(value))),
        }
    }

    /// Current snapshot.
    pub fn get(&self) -> Arc<T> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(value);
    }

    /// Builds a new value from the current one and swaps it in.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let next = f(&guard);
        *guard = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_value_for_all_handles() {
        let a = SharedState::new(1);
        let b = a.clone();
        b.set(2);
        assert_eq!(*a.get(), 2);
    }

    #[test]
    fn snapshots_are_not_affected_by_later_writes() {
        let state = SharedState::new(String::from("before"));
        let snapshot = state.get();
        state.set(String::from("after"));
        assert_eq!(snapshot.as_str(), "before");
        assert_eq!(state.get().as_str(), "after");
    }

    #[test]
    fn update_derives_from_current() {
        let state = SharedState::new(vec![1, 2]);
        state.update(|v| v.iter().map(|x| x * 10).collect());
        assert_eq!(*state.get(), vec![10, 20]);
    }
}
