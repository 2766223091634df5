//! Cache Module
//!
//! In-memory response cache with TTL expiration enforced by a background reaper.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

pub(crate) use store::Shared;
