//! Ordering: in-place stable sort and reversal, and shuffling into a copy.

use std::cmp::Ordering;

use crate::Seq;
use crate::random::{self, RandomSource};

impl<'a, T> Seq<'a, T> {
    /// Sorts in place with a strict less-than comparator and returns `self`.
    ///
    /// The sort is stable: elements neither less than the other keep their input order.
    /// Attached caller storage is sorted in place; a read-only view is detached first.
    /// `less` must be a strict weak ordering.
    pub fn sort<F>(&mut self, mut less: F) -> &mut Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        self.items_mut().sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    /// Sorts in place by a derived key and returns `self`. Stable.
    pub fn sort_by_key<K, F>(&mut self, key: F) -> &mut Self
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items_mut().sort_by_key(key);
        self
    }

    /// Reverses in place and returns `self`.
    pub fn reverse(&mut self) -> &mut Self
    where
        T: Clone,
    {
        self.items_mut().reverse();
        self
    }

    /// Returns a shuffled copy, drawing from the process-wide random source.
    ///
    /// The source is left untouched. Elements are copied before the random source is
    /// locked, so the lock is held only while drawing indices.
    pub fn shuffle(&self) -> Seq<'a, T>
    where
        T: Clone,
    {
        let mut items = self.items_copy();
        random::with_random_source(|source| fisher_yates(&mut items, source));
        self.derive(items)
    }

    /// Returns a shuffled copy, drawing from `source`.
    pub fn shuffle_with(&self, source: &mut dyn RandomSource) -> Seq<'a, T>
    where
        T: Clone,
    {
        let mut items = self.items_copy();
        fisher_yates(&mut items, source);
        self.derive(items)
    }
}

fn fisher_yates<T>(items: &mut [T], source: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1);
        items.swap(i, j);
    }
}
