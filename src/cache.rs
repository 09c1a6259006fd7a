//! Bounded in-memory memoization for resolved locations
//!
//! Entries are keyed by the exact query string. Once the cache holds more
//! than its capacity, the least valuable entries (moka's TinyLFU admission
//! with LRU eviction) are dropped. The cache is safe to share between
//! request handlers; clones share the same storage.

use moka::sync::Cache;

use crate::models::ResolvedLocation;

/// Default number of resolved locations kept in memory
pub const DEFAULT_CAPACITY: u64 = 100;

#[derive(Clone)]
pub struct LocationCache {
    store: Cache<String, ResolvedLocation>,
}

impl LocationCache {
    /// Create a cache bounded to `capacity` entries
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self {
            store: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Stores a resolved location under its query
    #[tracing::instrument(name = "put_cache", level = "debug", skip(self, value))]
    pub fn put(&self, key: &str, value: ResolvedLocation) {
        self.store.insert(key.to_string(), value);
    }

    /// Retrieves a previously stored location.
    /// Returns `None` for cache misses and evicted entries.
    #[tracing::instrument(name = "query_cache", level = "debug", skip(self))]
    pub fn get(&self, key: &str) -> Option<ResolvedLocation> {
        let hit = self.store.get(key);
        if hit.is_some() {
            tracing::debug!("Key found");
        } else {
            tracing::debug!("Key not found");
        }
        hit
    }

    /// Configured upper bound on entries
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.store.policy().max_capacity().unwrap_or(DEFAULT_CAPACITY)
    }

    /// Number of entries after applying pending evictions
    #[must_use]
    pub fn len(&self) -> u64 {
        self.store.run_pending_tasks();
        self.store.entry_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for LocationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationCache")
            .field("capacity", &self.capacity())
            .field("entries", &self.store.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, LocationSource};

    fn location(name: &str) -> ResolvedLocation {
        ResolvedLocation {
            coordinates: Coordinates::new(12.5, -45.25),
            name: name.to_string(),
            description: "Location approximated based on name".to_string(),
            source: LocationSource::Estimated,
        }
    }

    #[test]
    fn test_put_then_get() {
        let cache = LocationCache::new(10);
        assert!(cache.get("Atlantis").is_none());

        cache.put("Atlantis", location("Atlantis"));
        assert_eq!(cache.get("Atlantis"), Some(location("Atlantis")));
    }

    #[test]
    fn test_keys_are_exact() {
        let cache = LocationCache::new(10);
        cache.put("Atlantis", location("Atlantis"));
        assert!(cache.get("atlantis").is_none());
        assert!(cache.get(" Atlantis").is_none());
    }

    #[test]
    fn test_clones_share_storage() {
        let cache = LocationCache::new(10);
        let handle = cache.clone();
        handle.put("Lemuria", location("Lemuria"));
        assert!(cache.get("Lemuria").is_some());
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_capacity_is_bounded() {
        let cache = LocationCache::new(20);
        assert_eq!(cache.capacity(), 20);
        for i in 0..500 {
            let key = format!("place-{i}");
            cache.put(&key, location(&key));
            if i % 50 == 0 {
                let _ = cache.len();
            }
        }
        assert!(cache.len() <= 20, "cache grew to {}", cache.len());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = LocationCache::new(1_000);
        std::thread::scope(|scope| {
            for worker in 0..4 {
                let cache = cache.clone();
                scope.spawn(move || {
                    for i in 0..100 {
                        let key = format!("w{worker}-{i}");
                        cache.put(&key, location(&key));
                        assert!(cache.get(&key).is_some());
                    }
                });
            }
        });
        assert_eq!(cache.len(), 400);
    }
}
