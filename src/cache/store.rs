//! TTL Cache Module
//!
//! Generic in-memory key/value store where every entry expires a fixed
//! duration after it was written. Expiry is lazy: stale entries are only
//! discovered, and removed, when they are read.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == TTL Cache ==
/// Expiring key/value store parameterized over the stored value type.
///
/// The cache does no locking of its own. Owners that share it across tasks
/// wrap it in a mutex, since `get` mutates on expiry.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Lifetime applied to every entry
    ttl: Duration,
    /// Source of monotonic time
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: CacheStats,
}

impl<T: Clone> TtlCache<T> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    ///
    /// A zero `ttl` is allowed: every read after a `set` misses.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache that reads time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it has not expired.
    ///
    /// Postcondition: if an entry exists but is stale, it is removed before
    /// returning `None`, so `len()` no longer counts it.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = self.clock.now();

        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => self.ttl.is_zero() || entry.is_expired_at(now),
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any existing entry and
    /// restarting its expiry from now.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let entry = CacheEntry::new(value, self.clock.now(), self.ttl);
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry regardless of expiry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    /// Number of stored entries, including stale ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
