//! Concurrent caches keyed by shapes or nominal identities.
//!
//! Caches are explicit objects owned by whoever needs them and passed by
//! reference. There are no ambient or global caches in the engine.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use tracing::trace;

/// Thread-safe map from a key (typically a [`Shape`](crate::Shape)) to a
/// derived artifact, with atomic compute-if-absent.
pub struct ShapeCache<K, V> {
    entries: DashMap<K, V, FxBuildHasher>,
}

impl<K: Eq + Hash, V: Clone> Default for ShapeCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> ShapeCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Cached value for `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|r| r.value().clone())
    }

    /// Cached value for `key`, computing it with `init` if absent.
    ///
    /// The key's shard stays locked while `init` runs, so concurrent callers
    /// for the same key wait and `init` runs at most once per key. `init` must
    /// not touch this cache.
    pub fn get_or_insert_with(&self, key: K, init: impl FnOnce() -> V) -> V {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => occupied.get().clone(),
            Entry::Vacant(vacant) => {
                trace!("ShapeCache miss");
                vacant.insert(init()).value().clone()
            }
        }
    }

    /// Fallible [`get_or_insert_with`](Self::get_or_insert_with). Nothing is
    /// cached when `init` fails.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        init: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => Ok(occupied.get().clone()),
            Entry::Vacant(vacant) => {
                let value = init()?;
                Ok(vacant.insert(value).value().clone())
            }
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../tests/cache_tests.rs"]
mod tests;
