//! Cache Entry Module
//!
//! Defines a single cached value together with its insertion instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached value stamped with the monotonic instant it was inserted at.
///
/// The timestamp is fixed at construction. Overwriting a key replaces the
/// whole entry rather than touching the old one.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion instant (monotonic clock)
    created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub(crate) fn with_created_at(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    /// Returns the instant this entry was inserted.
    pub fn inserted_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates to zero if `now` precedes the insertion instant, which can
    /// happen when a scan snapshot of the clock was taken just before a racing
    /// insert.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live;
    /// it only becomes eligible for eviction once the age strictly exceeds it.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
