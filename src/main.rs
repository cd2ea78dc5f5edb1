//! Fetch Cache - interactive location-area browser
//!
//! Browses the PokeAPI through a caching client so that revisited pages are
//! served from memory.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetch_cache::repl::{self, Session};
use fetch_cache::{ApiClient, Config};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the API client and its cache (starts the reaper)
/// 4. Run the interactive loop on stdin until `exit` or end of input
/// 5. Shut the cache down, joining the reaper task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={:?}, base_url={}, request_timeout={:?}",
        config.cache_ttl, config.base_url, config.request_timeout
    );

    let client = ApiClient::new(&config).context("failed to create API client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    session.into_client().shutdown().await;
    info!("Shutdown complete");

    result
}
