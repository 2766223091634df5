//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::cache::Shared;

/// Spawns the reaper for one cache on `runtime`.
///
/// The task wakes once per TTL, locks the store, and drops every entry older
/// than the TTL. It holds only a weak reference between ticks, so it exits
/// on its own once the last cache handle is dropped; otherwise it runs until
/// the runtime shuts down.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `shared` - Weak reference to the cache state to sweep
/// * `period` - Time between sweeps, equal to the cache TTL; the caller
///   guarantees `now + 2 * period` fits in an `Instant`
///
/// # Returns
/// The JoinHandle of the spawned task.
pub(crate) fn spawn_reaper_task(
    runtime: &Handle,
    shared: Weak<Shared>,
    period: Duration,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        debug!(?period, "Starting cache reaper");

        // First tick one full period after startup, not immediately
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(shared) = shared.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            let removed = shared.reap_expired();
            if removed > 0 {
                debug!(removed, "Cache reaper removed expired entries");
            } else {
                debug!("Cache reaper found no expired entries");
            }
        }
    })
}
