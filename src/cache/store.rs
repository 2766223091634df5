//! Cache Store Module
//!
//! The TTL cache handle: a HashMap of raw payloads behind a single mutex,
//! swept by a background reaper on a period equal to the TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper_task;

// == Store ==
/// Everything guarded by the cache lock.
#[derive(Debug, Default)]
struct Store {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and reaper counters
    stats: CacheStats,
}

// == Shared State ==
/// State shared between cache handles and the reaper task.
#[derive(Debug)]
pub(crate) struct Shared {
    store: Mutex<Store>,
    ttl: Duration,
}

impl Shared {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            store: Mutex::new(Store::default()),
            ttl,
        }
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Reap Expired ==
    /// Removes every entry strictly older than the TTL.
    ///
    /// `now` is taken after the lock is acquired, so an entry is only ever
    /// removed if it was already older than the TTL while the sweep held the lock.
    /// Returns the number of entries removed.
    pub(crate) fn reap_expired(&self) -> usize {
        let mut store = self.store.lock();
        let now = Instant::now();
        let ttl = self.ttl;

        let before = store.entries.len();
        store.entries.retain(|_, entry| !entry.is_expired_at(now, ttl));
        let removed = before - store.entries.len();

        let remaining = store.entries.len();
        store.stats.record_reaped(removed);
        store.stats.set_total_entries(remaining);
        removed
    }
}

// == TTL Cache ==
/// Thread-safe response cache with time-based expiry.
///
/// Cloning the handle is cheap and every clone sees the same entries. The
/// reaper spawned by [`TtlCache::new`] keeps running while any handle is
/// alive; there is no explicit shutdown.
#[derive(Debug, Clone)]
pub struct TtlCache {
    shared: Arc<Shared>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and spawns its reaper task.
    ///
    /// The reaper wakes every `ttl` and drops entries older than `ttl`, so an
    /// entry lives between one and two TTLs.
    ///
    /// # Errors
    /// - [`PokedexError::InvalidTtl`] if `ttl` is zero, or if two TTLs from
    ///   now cannot be represented as an [`Instant`]
    /// - [`PokedexError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl);
        }
        // The reaper schedules deadlines up to two periods ahead
        ttl.checked_mul(2)
            .and_then(|span| Instant::now().checked_add(span))
            .ok_or(PokedexError::InvalidTtl)?;

        let runtime = Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;

        let shared = Arc::new(Shared::new(ttl));
        spawn_reaper_task(&runtime, Arc::downgrade(&shared), ttl);

        Ok(Self { shared })
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    ///
    /// The creation time is reset, so a re-added entry starts a fresh TTL.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let entry = CacheEntry::new(value.into());

        let mut store = self.shared.store.lock();
        store.entries.insert(key, entry);
        let count = store.entries.len();
        store.stats.set_total_entries(count);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    ///
    /// The entry's age is not checked here: an entry past its TTL is still
    /// returned until the reaper removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.shared.store.lock();
        let value = store.entries.get(key).map(|entry| entry.value.clone());

        match value {
            Some(_) => store.stats.record_hit(),
            None => store.stats.record_miss(),
        }
        trace!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// The TTL this cache was created with.
    pub fn ttl(&self) -> Duration {
        self.shared.ttl()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.shared.store.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.shared.store.lock().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let store = self.shared.store.lock();
        let mut stats = store.stats.clone();
        stats.set_total_entries(store.entries.len());
        stats
    }
}
