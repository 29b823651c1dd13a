//! Archer Core
//!
//! Foundational pieces shared by the preference stores:
//!
//! - **Storage**: a key/value capability ([`KeyValueStore`]) with an in-memory
//!   backend for tests and a file-per-key backend for devices
//! - **Persistence**: an ordered write worker ([`Persister`]) so durable writes
//!   never block the event loop and last-issued always wins
//! - **Observers**: an explicit subscription registry ([`Observers`]) used in
//!   place of a global redraw callback
//!
//! # Example
//!
//! ```rust,ignore
//! use archer_core::{MemoryStore, Persister};
//! use std::sync::Arc;
//!
//! let persister = Persister::spawn(Arc::new(MemoryStore::new()));
//!
//! // Fire-and-forget: failures are logged, never returned
//! persister.write_detached("archery-settings", "{}");
//!
//! // Awaited: the caller learns whether the attempt succeeded
//! persister.write("@arrow_tracker_language", "fi").await?;
//! ```

pub mod error;
pub mod observer;
pub mod persist;
pub mod storage;

pub use error::{PreferenceError, StorageError};
pub use observer::{Callback, Observers, Subscription};
pub use persist::Persister;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock a mutex, recovering the guard if a previous holder panicked.
///
/// All guarded values in this workspace are plain data that stay valid even if
/// a callback panicked mid-update.
pub fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-lock an `RwLock`, recovering from poisoning.
pub fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write-lock an `RwLock`, recovering from poisoning.
pub fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
