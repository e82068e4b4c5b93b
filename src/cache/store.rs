//! Cache Store Module
//!
//! Plain keyed storage with timestamped entries. Synchronization lives one
//! level up in [`Cache`](crate::cache::Cache); this type is only ever touched
//! while its owner's lock is held.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key/value storage whose entries carry their insertion instant.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Age after which the reaper drops an entry
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the time-to-live the store was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The replacement gets a fresh timestamp, so an overwritten key restarts
    /// its lifetime.
    pub fn put(&mut self, key: String, value: V) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Expiry is not checked here. An entry stays visible until the reaper
    /// removes it, which bounds staleness to one reaper interval.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn put_at(&mut self, key: String, value: V, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::with_created_at(value, created_at));
    }

    #[cfg(test)]
    pub(crate) fn inserted_at(&self, key: &str) -> Option<Instant> {
        self.entries.get(key).map(CacheEntry::inserted_at)
    }
}
