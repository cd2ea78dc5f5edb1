//! Cache Store Module
//!
//! Plain HashMap storage with insertion timestamps and a TTL sweep.
//! Locking is the caller's concern; see [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};

// == Cache Store ==
/// Key-to-payload storage with a fixed freshness window.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age after which an entry becomes eligible for sweeping
    ttl: Duration,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Stores a payload under `key`, stamped with the current time.
    ///
    /// An existing entry for the key is replaced and its age reset.
    pub fn add(&mut self, key: String, payload: Bytes) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Entry age is not checked here; stale entries stay visible until the
    /// next sweep removes them.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Removes every entry older than the TTL as of `now`.
    pub fn sweep_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        removed
    }

    // == TTL ==
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
