//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value and the instant after which it is stale.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub data: T,
    /// Absolute expiry instant (insertion time + ttl), `None` when the
    /// ttl is too large to represent and the entry never expires
    pub expire_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped at `now` that lives for `ttl`.
    pub fn new(data: T, now: Instant, ttl: Duration) -> Self {
        Self {
            data,
            expire_at: now.checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now`.
    ///
    /// Boundary condition: the entry is still live at exactly `expire_at`
    /// and becomes stale strictly after it.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expire_at.is_some_and(|expire_at| now > expire_at)
    }

    // == Time To Live ==
    /// Returns the time left before expiry, zero once stale.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        match self.expire_at {
            Some(expire_at) => expire_at.saturating_duration_since(now),
            None => Duration::MAX,
        }
    }
}
