//! Cache Entry Module
//!
//! Defines a single stored response payload and its insertion time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: a raw payload plus its creation time.
///
/// Entries are never mutated in place; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was created (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was created, measured against `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// live; only strictly older entries are eligible for removal.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
