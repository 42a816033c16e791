//! Merging mappings.
//!
//! Both functions return a new mapping and leave their inputs alone.

use std::hash::Hash;

use sundry_foundation::Dict;

/// Overlays each source onto `target` in order. Later sources win.
#[must_use]
pub fn extend<K, V>(target: &Dict<K, V>, sources: &[Dict<K, V>]) -> Dict<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    sources
        .iter()
        .fold(target.clone(), |merged, source| merged.union(source))
}

/// Fills keys missing from `target` using each source in order.
///
/// A key already present is never replaced, so `target` beats every source
/// and earlier sources beat later ones.
#[must_use]
pub fn defaults<K, V>(target: &Dict<K, V>, sources: &[Dict<K, V>]) -> Dict<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    sources
        .iter()
        .fold(target.clone(), |merged, source| source.union(&merged))
}
