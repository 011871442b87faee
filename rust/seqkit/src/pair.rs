//! Two-field records produced by map conversion and zipping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key and its value, as produced by [`from_map`](crate::from_map) and consumed by
/// [`to_map_kv`](crate::to_map_kv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Pair<K, V> {
        Pair { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair::new(key, value)
    }
}

/// Positionally matched elements of two sequences, as produced by [`zip`](crate::zip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuple<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple<A, B> {
    pub fn new(first: A, second: B) -> Tuple<A, B> {
        Tuple { first, second }
    }

    #[inline]
    pub fn first(&self) -> &A {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Tuple::new(first, second)
    }
}
