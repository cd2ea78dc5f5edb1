//! Cache Handle Module
//!
//! Owns a lock-guarded [`CacheStore`] together with its reaper task.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStore, StatsSnapshot};
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// A time-bounded cache shared by concurrent callers.
///
/// Reads run in parallel; writes and reaper sweeps take the lock exclusively.
/// Tokio's `RwLock` queues waiters fairly, so a steady stream of readers
/// cannot starve a writer.
///
/// The cache is not `Clone`. Share it by reference or wrap it in an `Arc`;
/// dropping the last owner stops the reaper.
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    reaper: ReaperHandle,
    ttl: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current runtime.
    ///
    /// The reaper sweeps once every `ttl`, so an entry is removed between
    /// `ttl` and `2 * ttl` after it was added.
    ///
    /// # Errors
    /// - [`CacheError::InvalidTtl`] if `ttl` is zero
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(ttl));
        }

        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(&runtime, store.clone(), ttl);

        debug!("Cache created with ttl {:?}", ttl);
        Ok(Self { store, reaper, ttl })
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub async fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let key = key.into();
        let payload = payload.into();

        let mut store = self.store.write().await;
        store.add(key, payload);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a miss.
    ///
    /// The payload may be up to one reaper period past its TTL.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.read().await;
        store.get(key)
    }

    // == TTL ==
    /// Returns the freshness window this cache was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit, then drops the entries.
    pub async fn shutdown(self) {
        self.reaper.shutdown().await;
        debug!("Cache shut down");
    }
}
