//! Shared Cache Handle
//!
//! Wraps a [`CacheStore`] in a single coarse lock and ties it to a
//! background reaper.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::tasks::{spawn_reaper, ReaperHandle};

/// Shortest period the reaper will tick at. A zero TTL would otherwise ask
/// the timer for a zero-length interval.
pub const MIN_REAP_INTERVAL: Duration = Duration::from_millis(1);

// == Cache ==
/// Cloneable, thread-safe handle to an expiring key/value cache.
///
/// Clones share the same entries. Independently constructed caches never
/// share state.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone + Send + 'static> Cache<V> {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl` and starts its reaper.
    ///
    /// The reaper ticks once per `ttl` and keeps running until the returned
    /// [`ReaperHandle`] is stopped or every clone of the cache is dropped.
    /// Dropping the handle without calling [`ReaperHandle::stop`] leaves the
    /// reaper running.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(ttl: Duration) -> (Self, ReaperHandle) {
        let cache = Self::detached(ttl);
        info!(?ttl, "Created cache, clearing it after {:?}", ttl);

        let reaper = spawn_reaper(&cache, ttl.max(MIN_REAP_INTERVAL));
        (cache, reaper)
    }

    /// Creates a cache with no reaper attached. Entries never expire unless
    /// [`Cache::reap_expired`] is called.
    pub(crate) fn detached(ttl: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new(ttl))),
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamping it with the
    /// current instant.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.lock().put(key.into(), value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present.
    ///
    /// No expiry check happens here: an entry past its TTL remains visible
    /// until the next reaper pass removes it.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key)
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.lock().ttl()
    }

    /// Returns the number of entries currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Runs one reap pass against the current instant.
    pub(crate) fn reap_expired(&self) -> usize {
        self.lock().reap_expired(Instant::now())
    }

    pub(crate) fn downgrade(&self) -> WeakCache<V> {
        WeakCache {
            store: Arc::downgrade(&self.store),
        }
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("Cache lock poisoned, recovering");
            let guard = poisoned.into_inner();
            self.store.clear_poison();
            guard
        })
    }
}

// == Weak Cache ==
/// Non-owning reference held by the reaper so it never keeps a cache alive.
#[derive(Debug)]
pub(crate) struct WeakCache<V> {
    store: Weak<Mutex<CacheStore<V>>>,
}

impl<V> WeakCache<V> {
    pub(crate) fn upgrade(&self) -> Option<Cache<V>> {
        self.store.upgrade().map(|store| Cache { store })
    }
}
