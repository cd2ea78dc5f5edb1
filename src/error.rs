//! Error types for the cache and its fetch layer
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error; lookups report absence through `Option`.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while building a cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL must be strictly positive
    #[error("Invalid TTL: {0:?} (must be greater than zero)")]
    InvalidTtl(Duration),

    /// The reaper needs a Tokio runtime to run on
    #[error("Cache must be created from within a Tokio runtime")]
    NoRuntime,
}

// == Fetch Error Enum ==
/// Errors raised by the API client while fetching or decoding a resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or unreadable body
    #[error("Failed to fetch data: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API returned status {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The cache backing the client could not be built
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Command Error Enum ==
/// Errors raised while parsing a line of interactive input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command. Type 'help' for available commands.")]
    Unknown(String),

    #[error("please provide {what} (e.g., '{example}')")]
    MissingArgument {
        what: &'static str,
        example: &'static str,
    },
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
