//! Read-only queries: membership, predicates and positional lookup.
//!
//! Lookups return `Option` and never panic on empty input, a failed match or an
//! out-of-range index.

use crate::Seq;

impl<'a, T> Seq<'a, T> {
    /// Returns `true` if some element satisfies `pred`. `false` on empty input.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }

    /// Returns `true` if every element satisfies `pred`. Vacuously `true` on empty input.
    pub fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(pred)
    }

    /// Returns `true` if no element satisfies `pred`. Vacuously `true` on empty input.
    pub fn none<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any(pred)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items().contains(value)
    }

    /// Returns the element at `index`, or `None` if `index` is negative or past the end.
    pub fn at(&self, index: isize) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items().get(index))
    }

    pub fn first(&self) -> Option<&T> {
        self.items().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items().last()
    }

    /// Returns the first element satisfying `pred`.
    pub fn first_where<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| pred(item))
    }

    /// Alias of [`Seq::first_where`].
    pub fn find_where<F>(&self, pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.first_where(pred)
    }

    /// Returns the last element satisfying `pred`, scanning from the end.
    pub fn last_where<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().rev().find(|item| pred(item))
    }

    /// Returns the index of the first element satisfying `pred`.
    pub fn index_where<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_on_empty_input() {
        let empty = Seq::<i32>::new();
        assert!(!empty.any(|_| true));
        assert!(empty.all(|_| false));
        assert!(empty.none(|_| true));
        assert!(empty.is_empty());

        let absent = Seq::<i32>::absent();
        assert!(absent.all(|_| false));
        assert!(absent.is_empty());
    }

    #[test]
    fn predicates_short_circuit() {
        let seq = Seq::from_vec(vec![1, 2, 3, 4]);
        let mut visited = 0;
        assert!(seq.any(|&x| {
            visited += 1;
            x == 2
        }));
        assert_eq!(visited, 2);

        visited = 0;
        assert!(!seq.all(|&x| {
            visited += 1;
            x < 2
        }));
        assert_eq!(visited, 2);
        assert!(seq.none(|&x| x > 10));
    }

    #[test]
    fn contains_uses_equality() {
        let seq = Seq::from_vec(vec!["a".to_string(), "b".to_string()]);
        assert!(seq.contains(&"b".to_string()));
        assert!(!seq.contains(&"c".to_string()));
    }

    #[test]
    fn at_handles_bad_indices() {
        let seq = Seq::from_vec(vec![10, 20, 30]);
        assert_eq!(seq.at(0), Some(&10));
        assert_eq!(seq.at(2), Some(&30));
        assert_eq!(seq.at(3), None);
        assert_eq!(seq.at(-1), None);
        assert_eq!(Seq::<i32>::absent().at(0), None);
    }

    #[test]
    fn first_and_last() {
        let seq = Seq::from_vec(vec![1, 2, 3]);
        assert_eq!(seq.first(), Some(&1));
        assert_eq!(seq.last(), Some(&3));
        let empty = Seq::<i32>::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn where_lookups() {
        let seq = Seq::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.first_where(|x| x % 2 == 0), Some(&2));
        assert_eq!(seq.find_where(|x| *x > 3), Some(&4));
        assert_eq!(seq.last_where(|x| x % 2 == 0), Some(&4));
        assert_eq!(seq.first_where(|x| *x > 10), None);
        assert_eq!(seq.last_where(|x| *x > 10), None);
    }

    #[test]
    fn index_where_distinguishes_zero_from_missing() {
        let seq = Seq::from_vec(vec![5, 6, 7]);
        assert_eq!(seq.index_where(|x| *x == 5), Some(0));
        assert_eq!(seq.index_where(|x| *x == 7), Some(2));
        assert_eq!(seq.index_where(|x| *x == 8), None);
    }
}
