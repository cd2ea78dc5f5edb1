//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Handle to a running reaper task.
///
/// Dropping the handle closes the shutdown channel, which also stops the task
/// at its next wait step. [`ReaperHandle::shutdown`] additionally waits for
/// the task to finish.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits until it has exited.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;

        if let Err(e) = self.handle.await {
            warn!("Reaper task ended abnormally: {}", e);
        }
    }
}

/// Spawns a task on `runtime` that sweeps `store` once every `period`.
///
/// The first sweep happens one full period after spawning. Each sweep holds
/// the write lock only for the duration of the scan.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
/// let reaper = spawn_reaper(&Handle::current(), store.clone(), ttl);
/// // Later, during teardown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(
    runtime: &Handle,
    store: Arc<RwLock<CacheStore>>,
    period: Duration,
) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let handle = runtime.spawn(async move {
        info!("Starting cache reaper with a period of {:?}", period);

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.write().await;
                        guard.sweep_expired()
                    };

                    if removed > 0 {
                        info!("Reaper: removed {} expired entries", removed);
                    } else {
                        debug!("Reaper: no expired entries found");
                    }
                }
                // Fires on an explicit signal and when the sender is dropped
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }

        debug!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown_tx,
        handle,
    }
}
