//! Opt-in periodic maintenance on a tokio runtime
//!
//! A [`Store`] never runs anything in the background by itself. These helpers
//! let the owner spawn that work explicitly. Each task keeps only a weak
//! reference to the store and finishes on the first tick after the last
//! strong reference is dropped; abort the returned handle to stop it sooner.

use std::sync::{Arc, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::persist::JsonPersister;
use crate::store::Store;

/// Spawns a task that calls [`Store::cleanup`] every `every`
///
/// # Panics
///
/// Panics if called outside a tokio runtime, or if `every` is zero.
pub fn spawn_cleanup<V>(store: &Arc<Store<V>>, every: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let store = Arc::downgrade(store);
    tokio::spawn(async move {
        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let Some(strong) = store.upgrade() else { break };
            strong.cleanup();
        }
        tracing::debug!("store dropped, cleanup task exiting");
    })
}

/// Spawns a task that writes a snapshot of the store every `every`
///
/// Writes run on the blocking pool. A failed write is logged and retried on
/// the next tick.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, or if `every` is zero.
pub fn spawn_snapshots<V>(
    store: &Arc<Store<V>>,
    persister: JsonPersister,
    every: Duration,
) -> JoinHandle<()>
where
    V: Serialize + Send + Sync + 'static,
{
    let store = Arc::downgrade(store);
    tokio::spawn(async move {
        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if !snapshot_once(&store, &persister).await {
                break;
            }
        }
        tracing::debug!(path = %persister.path().display(), "store dropped, snapshot task exiting");
    })
}

/// Returns false once the store is gone
async fn snapshot_once<V>(store: &Weak<Store<V>>, persister: &JsonPersister) -> bool
where
    V: Serialize + Send + Sync + 'static,
{
    let Some(store) = store.upgrade() else {
        return false;
    };
    let persister = persister.clone();
    let result = tokio::task::spawn_blocking(move || persister.write(&store)).await;

    match result {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::warn!(error = %err, "periodic snapshot failed"),
        Err(err) => tracing::warn!(error = %err, "snapshot task panicked"),
    }
    true
}
