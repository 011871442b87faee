//! Grouping by key, conversion to and from maps, zipping and partitioning.
//!
//! Every result here is newly allocated. Maps are `ahash` maps, so iterating them (and
//! therefore [`from_map`] over one of them) has no stable order.

use std::hash::Hash;

use ahash::HashMap;

use crate::{Pair, Seq, Tuple};

impl<'a, T> Seq<'a, T> {
    /// Splits into the elements satisfying `pred` and those that don't, each keeping
    /// input order.
    pub fn partition<F>(&self, mut pred: F) -> (Seq<'a, T>, Seq<'a, T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let (matched, rest): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|item| pred(item));
        (self.derive(matched), self.derive(rest))
    }
}

/// Groups elements by `key` into sequences that keep input order.
pub fn group_by<'b, T, K, F>(seq: &Seq<'_, T>, key: F) -> HashMap<K, Seq<'b, T>>
where
    T: Clone + 'b,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    group_by_vec(seq, key)
        .into_iter()
        .map(|(k, items)| (k, Seq::from_vec(items)))
        .collect()
}

/// Groups elements by `key` into plain vectors that keep input order.
pub fn group_by_vec<T, K, F>(seq: &Seq<'_, T>, mut key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::default();
    for item in seq {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Materializes map entries as a sequence of [`Pair`]s, in the map's iteration order.
///
/// Accepts anything yielding `(&K, &V)`: `&HashMap`, `&BTreeMap` and so on. Sort the
/// result when a deterministic order matters.
pub fn from_map<'b, 'm, K, V, I>(map: I) -> Seq<'b, Pair<K, V>>
where
    K: Clone + 'm + 'b,
    V: Clone + 'm + 'b,
    I: IntoIterator<Item = (&'m K, &'m V)>,
{
    map.into_iter()
        .map(|(k, v)| Pair::new(k.clone(), v.clone()))
        .collect()
}

/// Builds a map from derived keys and values. On a key collision the last element wins.
pub fn to_map<T, K, V, FK, FV>(seq: &Seq<'_, T>, mut key: FK, mut value: FV) -> HashMap<K, V>
where
    K: Hash + Eq,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> V,
{
    let mut map: HashMap<K, V> = HashMap::default();
    map.reserve(seq.len());
    for item in seq {
        map.insert(key(item), value(item));
    }
    map
}

/// Builds a map from a sequence of pairs. On a key collision the last pair wins.
pub fn to_map_kv<K, V>(seq: &Seq<'_, Pair<K, V>>) -> HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    to_map(seq, |pair| pair.key().clone(), |pair| pair.value().clone())
}

/// Pairs elements positionally. The result is as long as the shorter input.
pub fn zip<'b, A, B>(a: &Seq<'_, A>, b: &Seq<'_, B>) -> Seq<'b, Tuple<A, B>>
where
    A: Clone + 'b,
    B: Clone + 'b,
{
    zip_with(a, b, |x, y| Tuple::new(x.clone(), y.clone()))
}

/// Combines elements positionally with `f`. The result is as long as the shorter input.
pub fn zip_with<'b, A, B, R, F>(a: &Seq<'_, A>, b: &Seq<'_, B>, mut f: F) -> Seq<'b, R>
where
    R: 'b,
    F: FnMut(&A, &B) -> R,
{
    a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn group_by_keeps_input_order_within_groups() {
        let seq = Seq::from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
        let groups = group_by(&seq, |x| x % 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&0].items(), &[3, 6]);
        assert_eq!(groups[&1].items(), &[1, 4, 7]);
        assert_eq!(groups[&2].items(), &[2, 5]);

        let raw = group_by_vec(&seq, |x| *x > 4);
        assert_eq!(raw[&true], vec![5, 6, 7]);
        assert_eq!(raw[&false], vec![1, 2, 3, 4]);
        assert!(group_by_vec(&Seq::<i32>::absent(), |x| *x).is_empty());
    }

    #[test]
    fn from_map_accepts_any_entry_iterator() {
        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        let pairs = from_map(&map);
        assert_eq!(pairs.items(), &[Pair::new("a", 1), Pair::new("b", 2)]);

        let hashed: HashMap<i32, char> = [(1, 'x')].into_iter().collect();
        assert_eq!(from_map(&hashed).items(), &[Pair::new(1, 'x')]);
    }

    #[test]
    fn to_map_last_write_wins() {
        let seq = Seq::from_vec(vec![("a", 1), ("b", 2), ("a", 3)]);
        let map = to_map(&seq, |entry| entry.0, |entry| entry.1);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
        assert_eq!(map["b"], 2);

        let pairs = Seq::from_vec(vec![Pair::new(1, "one"), Pair::new(1, "uno")]);
        assert_eq!(to_map_kv(&pairs)[&1], "uno");
    }

    #[test]
    fn zip_truncates_to_shorter_input() {
        let a = Seq::from_vec(vec![1, 2, 3]);
        let b = Seq::from_vec(vec!["x", "y"]);
        let zipped = zip(&a, &b);
        assert_eq!(zipped.items(), &[Tuple::new(1, "x"), Tuple::new(2, "y")]);

        let sums = zip_with(&a, &Seq::from_vec(vec![10, 20, 30, 40]), |x, y| x + y);
        assert_eq!(sums.items(), &[11, 22, 33]);
        assert!(zip(&a, &Seq::<i32>::absent()).is_empty());
    }

    #[test]
    fn partition_splits_in_order() {
        let seq = Seq::from_vec(vec![1, 2, 3, 4, 5]);
        let (evens, odds) = seq.partition(|x| x % 2 == 0);
        assert_eq!(evens.items(), &[2, 4]);
        assert_eq!(odds.items(), &[1, 3, 5]);

        let (yes, no) = Seq::<i32>::absent().partition(|_| true);
        assert!(yes.is_absent() && no.is_absent());
    }
}
