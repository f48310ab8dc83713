//! Process-wide, per-stage memoization (§4.E "Memoization", §5 "process-wide
//! bounded LRUs whose load/store are atomic"). Each stage that wraps an
//! external/expensive pure per-name computation owns one [`Memo`].

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

pub struct Memo<V: Clone> {
    cache: Mutex<LruCache<String, V>>,
}

impl<V: Clone> Memo<V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self { cache: Mutex::new(LruCache::new(capacity)) }
    }

    /// Return the cached value for `key`, computing and storing it on miss.
    pub fn get_or_compute(&self, key: &str, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.cache.lock().get(key) {
            return hit.clone();
        }
        let value = compute();
        self.cache.lock().put(key.to_string(), value.clone());
        value
    }
}
