//! # Result Cache
//!
//! Bounded least-recently-used memo of factory query results, keyed by the
//! factory's mutation version and the exact bit patterns of the query
//! tuple. A mutation bumps the version, so entries computed against an
//! older configuration can never be hit again. The factory also clears the
//! cache on every mutation, so stale entries do not occupy capacity.

use std::num::NonZeroUsize;

use lru::LruCache;

use datacolor_core::Color;

/// Default number of memoized results per factory.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    version: u64,
    determiners: Vec<u64>,
}

impl CacheKey {
    fn new(version: u64, determiners: &[f64]) -> Self {
        Self {
            version,
            // -0.0 and 0.0 evaluate identically, so they share an entry
            determiners: determiners
                .iter()
                .map(|&d| if d == 0.0 { 0u64 } else { d.to_bits() })
                .collect(),
        }
    }
}

/// LRU cache of `(version, determiners) -> Color`.
pub struct ResultCache {
    cache: LruCache<CacheKey, Color>,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` results. A capacity of
    /// zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn get(&mut self, version: u64, determiners: &[f64]) -> Option<Color> {
        self.cache.get(&CacheKey::new(version, determiners)).copied()
    }

    pub fn put(&mut self, version: u64, determiners: &[f64], color: Color) {
        self.cache.put(CacheKey::new(version, determiners), color);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
