//! Ordered persistence worker
//!
//! Every durable operation goes through a single FIFO queue drained by one
//! tokio task, which hands each operation to the blocking pool and waits for it
//! before taking the next. Two writes issued back-to-back therefore land in
//! issue order, and the last-issued record wins.

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

type Reply<T> = oneshot::Sender<Result<T, StorageError>>;

enum Command {
    Read {
        key: String,
        reply: Reply<Option<String>>,
    },
    Write {
        key: String,
        value: String,
        reply: Option<Reply<()>>,
    },
    Remove {
        key: String,
        reply: Option<Reply<()>>,
    },
    Flush(oneshot::Sender<()>),
}

/// Handle to the persistence worker. Cheap to clone.
#[derive(Clone)]
pub struct Persister {
    tx: mpsc::UnboundedSender<Command>,
}

impl Persister {
    /// Start the worker on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, rx));
        Self { tx }
    }

    /// Read a record, ordered after every write issued before it
    pub async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Read {
            key: key.to_string(),
            reply,
        })?;
        rx.await.map_err(|_| StorageError::WorkerGone)?
    }

    /// Queue a write and wait until it has been attempted
    pub async fn write(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Write {
            key: key.to_string(),
            value: value.into(),
            reply: Some(reply),
        })?;
        rx.await.map_err(|_| StorageError::WorkerGone)?
    }

    /// Queue a write without waiting. Failures are logged by the worker.
    pub fn write_detached(&self, key: &str, value: impl Into<String>) {
        let sent = self.send(Command::Write {
            key: key.to_string(),
            value: value.into(),
            reply: None,
        });
        if let Err(e) = sent {
            tracing::warn!(key = %key, error = %e, "dropping durable write");
        }
    }

    /// Queue a removal and wait until it has been attempted
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Remove {
            key: key.to_string(),
            reply: Some(reply),
        })?;
        rx.await.map_err(|_| StorageError::WorkerGone)?
    }

    /// Queue a removal without waiting
    pub fn remove_detached(&self, key: &str) {
        let sent = self.send(Command::Remove {
            key: key.to_string(),
            reply: None,
        });
        if let Err(e) = sent {
            tracing::warn!(key = %key, error = %e, "dropping durable removal");
        }
    }

    /// Wait until every operation queued so far has been attempted
    pub async fn flush(&self) {
        let (done, rx) = oneshot::channel();
        if self.send(Command::Flush(done)).is_ok() {
            let _ = rx.await;
        }
    }

    fn send(&self, cmd: Command) -> Result<(), StorageError> {
        self.tx.send(cmd).map_err(|_| StorageError::WorkerGone)
    }
}

async fn run(store: Arc<dyn KeyValueStore>, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Read { key, reply } => {
                let result = blocking(&store, move |s| s.get(&key)).await;
                let _ = reply.send(result);
            }
            Command::Write { key, value, reply } => {
                let k = key.clone();
                let result = blocking(&store, move |s| s.set(&k, &value)).await;
                finish(&key, "write", result, reply);
            }
            Command::Remove { key, reply } => {
                let k = key.clone();
                let result = blocking(&store, move |s| s.remove(&k)).await;
                finish(&key, "removal", result, reply);
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    tracing::debug!("persistence worker stopped");
}

async fn blocking<T, F>(store: &Arc<dyn KeyValueStore>, op: F) -> Result<T, StorageError>
where
    T: Send + 'static,
    F: FnOnce(&dyn KeyValueStore) -> Result<T, StorageError> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| StorageError::Unavailable(e.to_string()))?
}

fn finish(key: &str, what: &str, result: Result<(), StorageError>, reply: Option<Reply<()>>) {
    match reply {
        Some(reply) => {
            let _ = reply.send(result);
        }
        None => {
            if let Err(e) = result {
                tracing::warn!(key = %key, error = %e, "durable {what} failed");
            }
        }
    }
}
