//! Bounded LRU cache of compound splits
//!
//! Each entry remembers the lexicon generation it was computed against.
//! A lookup under a different generation is a miss, so entries computed
//! before a mutation are never served after it.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use super::decomposer::Decomposition;

struct CachedSplit {
    generation: u64,
    result: Decomposition,
}

/// Thread-safe split cache keyed by lowercase word
pub struct SplitCache {
    entries: Mutex<LruCache<String, CachedSplit>>,
}

impl SplitCache {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached result for `word` if it was computed at `generation`
    pub fn get(&self, word: &str, generation: u64) -> Option<Decomposition> {
        let mut entries = self.entries.lock();
        let stale = match entries.get(word) {
            Some(entry) if entry.generation == generation => return Some(entry.result.clone()),
            Some(_) => true,
            None => false,
        };
        if stale {
            entries.pop(word);
        }
        None
    }

    /// Insert a result, evicting the least recently used entry when full
    pub fn put(&self, word: String, generation: u64, result: Decomposition) {
        self.entries
            .lock()
            .put(word, CachedSplit { generation, result });
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }
}
