//! Function wrappers that cache results.
//!
//! Each wrapper owns its cache. Both are safe to share between threads.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use sundry_foundation::Value;

/// A function that runs at most once.
///
/// See [`once`].
pub struct Once<F, R> {
    func: F,
    result: OnceLock<R>,
}

/// Wraps `func` so that only the first call runs it.
///
/// Every later call returns the first call's result, whatever its
/// arguments. Concurrent first calls block until one of them finishes.
pub fn once<F, R>(func: F) -> Once<F, R>
where
    F: Fn() -> R,
{
    Once {
        func,
        result: OnceLock::new(),
    }
}

impl<F, R> Once<F, R>
where
    F: Fn() -> R,
    R: Clone,
{
    /// Runs the function on the first call; returns the cached result after.
    pub fn call(&self) -> R {
        self.result.get_or_init(|| (self.func)()).clone()
    }

    /// Same as [`Once::call`]; the arguments are ignored.
    pub fn call_with(&self, _args: &[Value]) -> R {
        self.call()
    }

    /// Returns true once the function has run.
    #[must_use]
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }
}

impl<F, R: std::fmt::Debug> std::fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Once").field("result", &self.result.get()).finish()
    }
}

/// A function whose results are cached per argument.
///
/// See [`memoize`].
pub struct Memoize<F, K, V> {
    func: F,
    cache: Mutex<HashMap<K, V>>,
}

/// Wraps `func` with a cache keyed by its argument.
///
/// A key is computed at most once no matter what it maps to, so falsy
/// results such as `0`, `""` or [`Value::Nil`] are cached like any other.
pub fn memoize<F, K, V>(func: F) -> Memoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash + Clone,
    V: Clone,
{
    Memoize {
        func,
        cache: Mutex::new(HashMap::new()),
    }
}

impl<F, K, V> Memoize<F, K, V>
where
    F: Fn(&K) -> V,
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Returns the cached result for `key`, computing it on a miss.
    ///
    /// The lock is released while the function runs, so the function may
    /// call back into the same wrapper. If two callers miss on the same key
    /// at once, both compute and the first stored result is kept.
    pub fn call(&self, key: &K) -> V {
        let cached = self.lock().get(key).cloned();
        if let Some(hit) = cached {
            return hit;
        }
        let computed = (self.func)(key);
        self.lock().entry(key.clone()).or_insert(computed).clone()
    }

    /// Number of cached keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns true if `key` has a cached result.
    #[must_use]
    pub fn is_cached(&self, key: &K) -> bool {
        self.lock().contains_key(key)
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // The map only ever holds finished results, so a poisoned lock is safe
    // to keep using.
    fn lock(&self) -> MutexGuard<'_, HashMap<K, V>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F, K, V> std::fmt::Debug for Memoize<F, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoize").finish_non_exhaustive()
    }
}
