//! System appearance watcher
//!
//! Polls an [`AppearanceSource`] on a tokio interval and pushes changes into a
//! [`SharedAppearance`]. Only desktop builds need this; mobile shells push the
//! OS signal directly.

use crate::appearance::{AppearanceSource, SharedAppearance};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Watcher configuration
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    /// Time between probes
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl WatcherConfig {
    pub fn with_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

/// Running watcher. Stops when dropped.
pub struct AppearanceWatcher {
    handle: JoinHandle<()>,
}

impl AppearanceWatcher {
    /// Start polling `probe` into `target`. Must be called within a tokio runtime.
    pub fn spawn(
        probe: Arc<dyn AppearanceSource>,
        target: Arc<SharedAppearance>,
        config: WatcherConfig,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.poll_interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let probe = Arc::clone(&probe);
                // Probes may shell out; keep them off the event loop.
                match tokio::task::spawn_blocking(move || probe.current()).await {
                    Ok(appearance) => {
                        if target.set(appearance) {
                            tracing::debug!("platform appearance changed to {:?}", appearance);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("appearance probe failed: {}", e);
                    }
                }
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for AppearanceWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
