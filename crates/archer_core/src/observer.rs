//! Observer registry
//!
//! Stores hand out a [`Subscription`] per registered callback. Callbacks are
//! cloned out of the registry before they run, so a callback may subscribe,
//! unsubscribe or read the store that is notifying it.

use crate::lock;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle returned by [`Observers::subscribe`]
    pub struct Subscription;
}

/// A change callback
pub type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A set of callbacks notified with a value of type `T`
pub struct Observers<T> {
    callbacks: Mutex<SlotMap<Subscription, Callback<T>>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        lock(&self.callbacks).insert(Arc::new(callback))
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        lock(&self.callbacks).remove(subscription).is_some()
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        lock(&self.callbacks).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every registered callback with `value`
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = lock(&self.callbacks).values().cloned().collect();
        for callback in callbacks {
            callback(value);
        }
    }
}
