//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: removes entries older than the cache TTL once per TTL period

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
