//! Keyed transform over dictionary-like collections
//!
//! Output order follows the collection's own iteration order: arbitrary for
//! `HashMap`, sorted by key for `BTreeMap`, insertion order for `IndexMap`.

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Apply `f` to every `(key, value)` entry, producing one output per entry.
///
/// Accepts anything that iterates borrowed pairs, so `&HashMap`, `&BTreeMap`
/// and `&IndexMap` can all be passed directly.
///
/// ```
/// use genops_core::transform_entries;
/// use std::collections::BTreeMap;
///
/// let stock = BTreeMap::from([("apples", 3), ("pears", 5)]);
/// let lines = transform_entries(&stock, |name, count| format!("{name}: {count}"));
///
/// assert_eq!(lines, vec!["apples: 3", "pears: 5"]);
/// ```
pub fn transform_entries<'a, K, V, O, I, F>(entries: I, mut f: F) -> Vec<O>
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    F: FnMut(&K, &V) -> O,
{
    let entries = entries.into_iter();
    let mut output = Vec::with_capacity(entries.size_hint().0);
    for (key, value) in entries {
        output.push(f(key, value));
    }
    output
}

/// Extension method exposing [`transform_entries`] on keyed collections.
pub trait KeyedExt<K, V> {
    /// See [`transform_entries`].
    fn transform_entries<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&K, &V) -> O;
}

impl<K, V, S> KeyedExt<K, V> for HashMap<K, V, S>
where
    S: BuildHasher,
{
    fn transform_entries<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&K, &V) -> O,
    {
        transform_entries(self, f)
    }
}

impl<K, V> KeyedExt<K, V> for BTreeMap<K, V> {
    fn transform_entries<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&K, &V) -> O,
    {
        transform_entries(self, f)
    }
}

impl<K, V, S> KeyedExt<K, V> for IndexMap<K, V, S> {
    fn transform_entries<O, F>(&self, f: F) -> Vec<O>
    where
        F: FnMut(&K, &V) -> O,
    {
        transform_entries(self, f)
    }
}
