//! Live theme binding
//!
//! Re-runs the resolver whenever the theme store or the platform signal
//! notifies, keeping the resolver itself pure. Observers of the binding only
//! hear about changes of the resolved palette, not every upstream event.

use std::sync::{Arc, RwLock, Weak};

use archer_core::{read, write, Observers, Subscription};
use archer_theme::{
    resolve_name, AppearanceSource, Palette, PaletteName, SharedAppearance, ThemeStore,
};

struct Inner {
    store: Arc<ThemeStore>,
    appearance: Arc<SharedAppearance>,
    current: RwLock<PaletteName>,
    observers: Observers<PaletteName>,
}

impl Inner {
    fn refresh(&self) {
        let next = resolve_name(self.store.theme_mode(), self.appearance.current());
        let previous = std::mem::replace(&mut *write(&self.current), next);
        if previous != next {
            tracing::debug!("ThemeBinding: palette {} -> {}", previous, next);
            self.observers.notify(&next);
        }
    }
}

/// Resolved palette for a theme store and a platform signal
pub struct ThemeBinding {
    inner: Arc<Inner>,
    store_sub: Subscription,
    appearance_sub: Subscription,
}

impl ThemeBinding {
    pub fn new(store: Arc<ThemeStore>, appearance: Arc<SharedAppearance>) -> Self {
        let initial = resolve_name(store.theme_mode(), appearance.current());
        let inner = Arc::new(Inner {
            store: Arc::clone(&store),
            appearance: Arc::clone(&appearance),
            current: RwLock::new(initial),
            observers: Observers::new(),
        });

        // Upstream callbacks hold weak refs so the stores never keep the binding alive.
        let weak: Weak<Inner> = Arc::downgrade(&inner);
        let store_sub = store.subscribe(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.refresh();
            }
        });
        let weak: Weak<Inner> = Arc::downgrade(&inner);
        let appearance_sub = appearance.subscribe(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.refresh();
            }
        });

        Self {
            inner,
            store_sub,
            appearance_sub,
        }
    }

    pub fn palette_name(&self) -> PaletteName {
        *read(&self.inner.current)
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_name(self.palette_name())
    }

    /// Called with the new palette name whenever the resolved palette changes
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&PaletteName) + Send + Sync + 'static,
    {
        self.inner.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.observers.unsubscribe(subscription)
    }
}

impl Drop for ThemeBinding {
    fn drop(&mut self) {
        self.inner.store.unsubscribe(self.store_sub);
        self.inner.appearance.unsubscribe(self.appearance_sub);
    }
}
