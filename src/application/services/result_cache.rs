use crate::ports::outbound::Clock;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// `None` when the TTL is too large to represent
    expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

/// ResultCache memoizes computed values per key for a fixed TTL.
///
/// A fresh entry is never recomputed. Expiry is lazy: a stale entry is only
/// discovered, and replaced, on the next lookup of its key. Concurrent misses
/// on the same key are not deduplicated; each caller computes and the last
/// write wins. A failed computation stores nothing.
///
/// Clones share the same entries.
#[derive(Clone)]
pub struct ResultCache<V, C> {
    name: &'static str,
    entries: Arc<DashMap<String, CacheEntry<V>>>,
    ttl: chrono::Duration,
    clock: C,
}

impl<V, C> ResultCache<V, C>
where
    V: Clone,
    C: Clock,
{
    /// Creates an empty cache
    ///
    /// # Arguments
    /// * `name` - Label used in log output
    /// * `ttl` - Validity of each entry from the moment it is stored
    /// * `clock` - Time source for expiry
    pub fn new(name: &'static str, ttl: Duration, clock: C) -> Self {
        Self {
            name,
            entries: Arc::new(DashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
            clock,
        }
    }

    /// Returns the fresh value for `key`, or runs `compute` and stores its result
    ///
    /// # Errors
    /// Propagates the error of `compute` unchanged; nothing is cached then.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.get(key) {
            debug!(cache = self.name, key, "cache hit");
            return Ok(value);
        }

        debug!(cache = self.name, key, "cache miss");
        let value = compute().await?;

        let expires_at = self.clock.now().checked_add_signed(self.ttl);
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                expires_at,
            },
        );

        Ok(value)
    }

    /// Returns the value for `key` if present and not expired
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let entry = self.entries.get(key)?;
        if entry.is_fresh(now) {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Drops the entry for `key`, if any
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Number of stored entries, including expired ones not yet replaced
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
