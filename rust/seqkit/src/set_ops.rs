//! Set-like operations. Results keep first-seen order and are fresh, owned storage.
//!
//! The hashed variants require `Hash + Eq` and run in linear time. [`Seq::unique`] takes
//! an arbitrary equality predicate instead and is quadratic in the number of distinct
//! elements, which gets slow past a few thousand elements.

use std::hash::Hash;

use ahash::AHashSet;

use crate::Seq;

impl<'a, T> Seq<'a, T> {
    /// Removes later duplicates under `eq`, keeping each first occurrence.
    ///
    /// Every element is compared against all distinct elements kept so far (O(n²)).
    /// Prefer [`Seq::unique_comparable`] or [`unique_by`](crate::unique_by) when the
    /// elements or a key can be hashed.
    pub fn unique<F>(&self, mut eq: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut kept: Vec<T> = Vec::new();
        for item in self {
            if !kept.iter().any(|seen| eq(seen, item)) {
                kept.push(item.clone());
            }
        }
        self.derive(kept)
    }

    /// Removes later duplicates, keeping each first occurrence. Linear time.
    pub fn unique_comparable(&self) -> Seq<'a, T>
    where
        T: Hash + Eq + Clone,
    {
        let mut seen = AHashSet::with_capacity(self.len());
        let kept = self
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect();
        self.derive(kept)
    }
}

/// Keeps the first element for each distinct key.
pub fn unique_by<'a, T, K, F>(seq: &Seq<'a, T>, mut key: F) -> Seq<'a, T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = AHashSet::with_capacity(seq.len());
    let kept = seq
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect();
    seq.derive(kept)
}

/// Distinct elements of `a` followed by the distinct elements of `b` not in `a`.
pub fn union<'b, T>(a: &Seq<'_, T>, b: &Seq<'_, T>) -> Seq<'b, T>
where
    T: Hash + Eq + Clone + 'b,
{
    let mut seen = AHashSet::with_capacity(a.len() + b.len());
    let items = a
        .iter()
        .chain(b.iter())
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    Seq::from_vec(items)
}

/// Distinct elements of `a` that also occur in `b`, in `a`'s order.
pub fn intersect<'b, T>(a: &Seq<'_, T>, b: &Seq<'_, T>) -> Seq<'b, T>
where
    T: Hash + Eq + Clone + 'b,
{
    let other: AHashSet<&T> = b.iter().collect();
    let mut seen = AHashSet::with_capacity(a.len().min(b.len()));
    let items = a
        .iter()
        .filter(|item| other.contains(*item) && seen.insert(*item))
        .cloned()
        .collect();
    Seq::from_vec(items)
}

/// Distinct elements of `a` that do not occur in `b`, in `a`'s order.
pub fn difference<'b, T>(a: &Seq<'_, T>, b: &Seq<'_, T>) -> Seq<'b, T>
where
    T: Hash + Eq + Clone + 'b,
{
    let other: AHashSet<&T> = b.iter().collect();
    Seq::from_vec(distinct_excluding(a, &other))
}

/// Distinct elements occurring in exactly one of `a` and `b`: those of `a` first, then
/// those of `b`, each in first-seen order.
pub fn symmetric_difference<'b, T>(a: &Seq<'_, T>, b: &Seq<'_, T>) -> Seq<'b, T>
where
    T: Hash + Eq + Clone + 'b,
{
    let in_a: AHashSet<&T> = a.iter().collect();
    let in_b: AHashSet<&T> = b.iter().collect();
    let mut items = distinct_excluding(a, &in_b);
    items.extend(distinct_excluding(b, &in_a));
    Seq::from_vec(items)
}

fn distinct_excluding<T>(seq: &Seq<'_, T>, excluded: &AHashSet<&T>) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut seen = AHashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| !excluded.contains(*item) && seen.insert(*item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[i32]) -> Seq<'static, i32> {
        Seq::copy_of(items)
    }

    #[test]
    fn union_keeps_first_seen_order() {
        let u = union(&seq(&[3, 1, 3, 2]), &seq(&[2, 5, 1, 4]));
        assert_eq!(u.items(), &[3, 1, 2, 5, 4]);
        assert!(!u.is_aliased());
    }

    #[test]
    fn intersect_and_difference() {
        let a = seq(&[1, 2, 2, 3, 4]);
        let b = seq(&[4, 2, 9]);
        assert_eq!(intersect(&a, &b).items(), &[2, 4]);
        assert_eq!(difference(&a, &b).items(), &[1, 3]);
        assert!(intersect(&a, &Seq::absent()).is_empty());
        assert_eq!(difference(&a, &Seq::absent()).items(), &[1, 2, 3, 4]);
    }

    #[test]
    fn symmetric_difference_lists_a_then_b() {
        let a = seq(&[1, 2, 3, 1]);
        let b = seq(&[5, 3, 4, 5]);
        assert_eq!(symmetric_difference(&a, &b).items(), &[1, 2, 5, 4]);
        assert!(symmetric_difference(&a, &a).is_empty());
    }

    #[test]
    fn unique_with_predicate() {
        let words = Seq::from_vec(vec!["Apple", "apple", "Pear", "APPLE", "pear"]);
        let distinct = words.unique(|a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(distinct.items(), &["Apple", "Pear"]);
        assert!(Seq::<i32>::absent().unique(|a, b| a == b).is_absent());
    }

    #[test]
    fn unique_comparable_removes_duplicates() {
        assert_eq!(seq(&[1, 1, 2, 1, 3, 2]).unique_comparable().items(), &[1, 2, 3]);
        assert!(Seq::<i32>::absent().unique_comparable().is_absent());
    }

    #[test]
    fn unique_by_keeps_first_per_key() {
        let distinct = unique_by(&seq(&[1, -1, 2, -2]), |x| x.abs());
        assert_eq!(distinct.items(), &[1, 2]);
    }
}
