//! Cache Module
//!
//! Provides an in-memory byte cache whose entries are swept once they outlive
//! a fixed TTL.

mod entry;
mod handle;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::CacheStore;
