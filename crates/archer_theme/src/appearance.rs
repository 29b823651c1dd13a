//! Platform appearance sources
//!
//! The platform signal is observed, never owned. Mobile shells push the OS
//! value into a [`SharedAppearance`] from their configuration-changed hook;
//! desktop builds can poll [`SystemAppearance`] with the `watcher` feature.

use crate::mode::PlatformAppearance;
use crate::platform::detect_platform_appearance;
use archer_core::{read, write, Observers, Subscription};
use std::sync::RwLock;
use tracing::debug;

/// Something that can report the current platform appearance
pub trait AppearanceSource: Send + Sync {
    fn current(&self) -> PlatformAppearance;
}

/// A fixed signal
impl AppearanceSource for PlatformAppearance {
    fn current(&self) -> PlatformAppearance {
        *self
    }
}

/// Probes the desktop environment on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAppearance;

impl AppearanceSource for SystemAppearance {
    fn current(&self) -> PlatformAppearance {
        detect_platform_appearance()
    }
}

/// Last reported platform appearance, with change notification
#[derive(Default)]
pub struct SharedAppearance {
    value: RwLock<PlatformAppearance>,
    observers: Observers<PlatformAppearance>,
}

impl SharedAppearance {
    pub fn new(initial: PlatformAppearance) -> Self {
        Self {
            value: RwLock::new(initial),
            observers: Observers::new(),
        }
    }

    /// Seed from a probe, e.g. [`SystemAppearance`]
    pub fn from_source(source: &dyn AppearanceSource) -> Self {
        Self::new(source.current())
    }

    /// Record a new signal. Observers run only when the value changed.
    ///
    /// Returns whether it changed.
    pub fn set(&self, appearance: PlatformAppearance) -> bool {
        let mut current = write(&self.value);
        if *current == appearance {
            return false;
        }
        debug!(
            "SharedAppearance::set - switching from {:?} to {:?}",
            *current, appearance
        );
        *current = appearance;
        drop(current);

        self.observers.notify(&appearance);
        true
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PlatformAppearance) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }
}

impl AppearanceSource for SharedAppearance {
    fn current(&self) -> PlatformAppearance {
        *read(&self.value)
    }
}
