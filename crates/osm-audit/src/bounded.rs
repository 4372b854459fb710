//! Capacity-limited sample set.

use std::collections::BTreeSet;

/// A set that accepts new values until it holds `capacity` of them, then
/// silently ignores further insertions.
///
/// Used to keep a handful of representative examples per category without
/// unbounded growth on noisy data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSet<T: Ord> {
    capacity: usize,
    items: BTreeSet<T>,
}

impl<T: Ord> BoundedSet<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: BTreeSet::new(),
        }
    }

    /// Insert `value` if there is room. Returns whether the set changed.
    pub fn insert(&mut self, value: T) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.insert(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Union with `other`, still capped at this set's capacity.
    pub fn merge(&mut self, other: Self) {
        for value in other.items {
            if self.is_full() {
                break;
            }
            self.items.insert(value);
        }
    }
}

impl<T: Ord> IntoIterator for BoundedSet<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a BoundedSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
