//! Fetch Cache - a time-bounded response cache for API clients
//!
//! Deduplicates repeated fetches of the same resource within a TTL window.
//! A background reaper sweeps entries once they outlive the TTL.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::ApiClient;
pub use config::Config;
pub use error::{CacheError, FetchError};
