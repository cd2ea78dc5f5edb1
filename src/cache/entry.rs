//! Cache Entry Module
//!
//! Defines a single cached payload together with its insertion time.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload plus the instant it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, shared with readers without copying
    pub payload: Bytes,
    /// Insertion time on the monotonic clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live.
    /// Only a strictly greater age makes it eligible for removal.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}
