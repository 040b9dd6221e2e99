//! Disjoint sets keyed by arbitrary hashable values.
//!
//! [`DisjointSet`] interns each value into a dense ordinal and delegates to
//! [`UnionFind`], so path compression and union-by-rank apply unchanged.
//! Values register themselves through [`DisjointSet::make_set`] or implicitly
//! through [`DisjointSet::union`]. Lookups of values that were never
//! registered return `None` rather than inventing a singleton.
use std::collections::HashMap;
use std::hash::Hash;

use crate::union_find::UnionFind;

/// A union-find structure over values of type `T`.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    ordinals: HashMap<T, usize>,
    values: Vec<T>,
    sets: UnionFind,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            ordinals: HashMap::new(),
            values: Vec::new(),
            sets: UnionFind::default(),
        }
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Creates an empty `DisjointSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` as a singleton set.
    ///
    /// Returns `true` if the value was new and `false` if it was already
    /// registered (in which case its set is left untouched).
    pub fn make_set(&mut self, value: T) -> bool {
        if self.ordinals.contains_key(&value) {
            return false;
        }
        self.intern(value);
        true
    }

    /// Returns the representative of the set containing `value`, or `None`
    /// if `value` was never registered.
    pub fn find(&mut self, value: &T) -> Option<&T> {
        let ordinal = *self.ordinals.get(value)?;
        let root = self.sets.find(ordinal);
        self.values.get(root)
    }

    /// Merges the sets containing `a` and `b`, registering either value first
    /// if needed.
    ///
    /// Returns `true` if two distinct sets were merged.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let oa = self.intern(a);
        let ob = self.intern(b);
        self.sets.union(oa, ob)
    }

    /// Returns `true` if both values are registered and share a set.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.ordinals.get(a), self.ordinals.get(b)) {
            (Some(&oa), Some(&ob)) => self.sets.connected(oa, ob),
            _ => false,
        }
    }

    /// Returns `true` if `value` has been registered.
    pub fn contains(&self, value: &T) -> bool {
        self.ordinals.contains_key(value)
    }

    /// Returns the current number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.sets.component_count()
    }

    /// Returns every set's representative together with its size.
    pub fn component_sizes(&mut self) -> Vec<(T, usize)> {
        self.sets
            .component_sizes()
            .into_iter()
            .filter_map(|(root, size)| self.values.get(root).map(|v| (v.clone(), size)))
            .collect()
    }

    /// Returns the number of registered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no value has been registered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn intern(&mut self, value: T) -> usize {
        if let Some(&ordinal) = self.ordinals.get(&value) {
            return ordinal;
        }
        let ordinal = self.sets.make_set();
        self.ordinals.insert(value.clone(), ordinal);
        self.values.push(value);
        ordinal
    }
}

impl<T: Eq + Hash + Clone> FromIterator<(T, T)> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        let mut set = Self::new();
        for (a, b) in pairs {
            set.union(a, b);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn make_set_is_idempotent() {
        let mut ds = DisjointSet::new();
        assert!(ds.make_set("a"));
        assert!(!ds.make_set("a"));
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    fn find_unregistered_is_none() {
        let mut ds: DisjointSet<&str> = DisjointSet::new();
        assert_eq!(ds.find(&"ghost"), None);
        assert!(!ds.contains(&"ghost"), "find must not register the value");
    }

    #[test]
    fn union_registers_both_values() {
        let mut ds = DisjointSet::new();
        assert!(ds.union("a", "b"));
        assert!(ds.contains(&"a"));
        assert!(ds.contains(&"b"));
        assert!(ds.connected(&"a", &"b"));
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    fn first_registered_value_is_representative_on_tie() {
        let mut ds = DisjointSet::new();
        ds.make_set("left");
        ds.make_set("right");
        ds.union("right", "left");
        assert_eq!(ds.find(&"right"), Some(&"left"));
    }

    #[test]
    fn connected_is_false_for_unknown_values() {
        let mut ds = DisjointSet::new();
        ds.make_set(1);
        assert!(!ds.connected(&1, &2));
        assert!(!ds.connected(&3, &4));
    }

    #[test]
    fn structured_keys() {
        let mut ds = DisjointSet::new();
        ds.union((0, 0, 0), (0, 0, 10));
        ds.union((0, 0, 10), (0, 0, 20));
        ds.make_set((5, 5, 5));
        assert!(ds.connected(&(0, 0, 0), &(0, 0, 20)));
        assert!(!ds.connected(&(0, 0, 0), &(5, 5, 5)));

        let mut sizes: Vec<usize> = ds.component_sizes().into_iter().map(|(_, s)| s).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 3]);
    }

    #[test]
    fn collect_from_pairs() {
        let mut ds: DisjointSet<char> = [('a', 'b'), ('c', 'd'), ('b', 'c'), ('x', 'y')]
            .into_iter()
            .collect();
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.component_count(), 2);
        assert!(ds.connected(&'a', &'d'));
        assert!(!ds.connected(&'a', &'x'));
    }
}
