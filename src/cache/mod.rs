//! Cache Module
//!
//! Provides an in-memory, concurrency-safe cache whose entries expire after a
//! fixed TTL. Expiry is enforced by a background reaper rather than on read.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::{Cache, MIN_REAP_INTERVAL};
pub use store::CacheStore;

pub(crate) use shared::WeakCache;
