//! Generic aggregation: counting, folding and extremes by ordering or key.

use std::hash::Hash;

use ahash::HashMap;

use crate::Seq;

impl<T> Seq<'_, T> {
    /// Number of elements; zero when absent.
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Number of occurrences of each distinct element.
    pub fn count_by_value(&self) -> HashMap<T, usize>
    where
        T: Hash + Eq + Clone,
    {
        count_by(self, T::clone)
    }
}

/// Number of elements per key.
pub fn count_by<T, K, F>(seq: &Seq<'_, T>, mut key: F) -> HashMap<K, usize>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::default();
    for item in seq {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Left fold: `f(f(f(initial, e0), e1), ...)`. Returns `initial` for an empty sequence.
pub fn reduce<T, A, F>(seq: &Seq<'_, T>, initial: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.iter().fold(initial, f)
}

/// Smallest element under `PartialOrd`; the first one on ties.
///
/// Incomparable pairs (such as NaN) never replace the current candidate.
pub fn min<'s, T: PartialOrd>(seq: &'s Seq<'_, T>) -> Option<&'s T> {
    pick(seq, |item, best| item < best)
}

/// Largest element under `PartialOrd`; the first one on ties.
pub fn max<'s, T: PartialOrd>(seq: &'s Seq<'_, T>) -> Option<&'s T> {
    pick(seq, |item, best| item > best)
}

/// Element with the smallest key; the first one on ties.
pub fn min_by<'s, T, K, F>(seq: &'s Seq<'_, T>, mut key: F) -> Option<&'s T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    pick_by_key(seq, &mut key, |item, best| item < best)
}

/// Element with the largest key; the first one on ties.
pub fn max_by<'s, T, K, F>(seq: &'s Seq<'_, T>, mut key: F) -> Option<&'s T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    pick_by_key(seq, &mut key, |item, best| item > best)
}

fn pick<'s, T>(seq: &'s Seq<'_, T>, better: impl Fn(&T, &T) -> bool) -> Option<&'s T> {
    let mut items = seq.iter();
    let first = items.next()?;
    Some(items.fold(first, |best, item| if better(item, best) { item } else { best }))
}

fn pick_by_key<'s, T, K>(
    seq: &'s Seq<'_, T>,
    key: &mut impl FnMut(&T) -> K,
    better: impl Fn(&K, &K) -> bool,
) -> Option<&'s T> {
    let mut items = seq.iter();
    let first = items.next()?;
    let mut best = (first, key(first));
    for item in items {
        let k = key(item);
        if better(&k, &best.1) {
            best = (item, k);
        }
    }
    Some(best.0)
}
