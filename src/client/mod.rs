//! Client Module
//!
//! HTTP client that consults the cache before every request and stores
//! successful response bodies afterwards.

mod api;

pub use api::ApiClient;
