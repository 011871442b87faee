//! Sub-sequence extraction: positional slices, predicate splits, chunks and windows.
//!
//! Unless noted otherwise these operations return views borrowing the source storage.
//! Counts larger than the sequence are clamped, so none of them panic.

use std::ops::{Bound, RangeBounds};

use crate::Seq;

impl<'a, T> Seq<'a, T> {
    /// Copies a prefix or suffix.
    ///
    /// `n > 0` keeps the first `n` elements, `n < 0` the last `|n|`, and `n == 0` none.
    /// Unlike the other slicing operations the result is an independent copy.
    pub fn take(&self, n: isize) -> Seq<'a, T>
    where
        T: Clone,
    {
        let items = self.items();
        let count = n.unsigned_abs().min(items.len());
        let taken = if n >= 0 {
            &items[..count]
        } else {
            &items[items.len() - count..]
        };
        self.derive(taken.to_vec())
    }

    /// View of the first `n` elements.
    pub fn first_n(&self, n: usize) -> Seq<'_, T> {
        self.view_range(0, n.min(self.len()))
    }

    /// View without the first `n` elements.
    pub fn skip(&self, n: usize) -> Seq<'_, T> {
        let len = self.len();
        self.view_range(n.min(len), len)
    }

    /// View without the last `n` elements.
    pub fn skip_last(&self, n: usize) -> Seq<'_, T> {
        let len = self.len();
        self.view_range(0, len - n.min(len))
    }

    /// View of the last `n` elements.
    pub fn take_last(&self, n: usize) -> Seq<'_, T> {
        let len = self.len();
        self.view_range(len - n.min(len), len)
    }

    /// View of the elements in `range`, clamped to the sequence bounds.
    pub fn slice<R>(&self, range: R) -> Seq<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };
        let end = end.min(len);
        self.view_range(start.min(end), end)
    }

    /// Copies the elements preceding the first one that satisfies `pred`.
    ///
    /// Without a match the whole sequence is copied.
    pub fn before<F>(&self, pred: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let end = self.index_where(pred).unwrap_or(self.len());
        self.derive(self.items()[..end].to_vec())
    }

    /// View of the elements following the first one that satisfies `pred`.
    ///
    /// Without a match, or when the match is the last element, the view is empty.
    pub fn after<F>(&self, pred: F) -> Seq<'_, T>
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len();
        let start = self.index_where(pred).map_or(len, |index| index + 1);
        self.view_range(start, len)
    }

    /// Copies elements up to, not including, the first one that satisfies `pred`.
    pub fn take_until_fn<F>(&self, mut pred: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let taken = self
            .iter()
            .take_while(|item| !pred(item))
            .cloned()
            .collect();
        self.derive(taken)
    }

    /// Copies elements up to, not including, the first one equal to `value`.
    pub fn take_until(&self, value: &T) -> Seq<'a, T>
    where
        T: Clone + PartialEq,
    {
        self.take_until_fn(|item| item == value)
    }

    /// Splits into consecutive views of `size` elements; the last one may be shorter.
    ///
    /// Returns `None` when `size` is zero, which is an invalid request rather than an
    /// empty result. An empty sequence yields `Some` of no chunks.
    pub fn chunk(&self, size: usize) -> Option<Vec<Seq<'_, T>>> {
        if size == 0 {
            return None;
        }
        let len = self.len();
        let chunks = (0..len)
            .step_by(size)
            .map(|start| self.view_range(start, (start + size).min(len)))
            .collect();
        Some(chunks)
    }

    /// Produces views of exactly `size` elements, starting every `step` elements.
    ///
    /// A `step` of zero is treated as one. Trailing windows shorter than `size` are
    /// omitted. Returns `None` when `size` is zero or exceeds the sequence length.
    pub fn window(&self, size: usize, step: usize) -> Option<Vec<Seq<'_, T>>> {
        let len = self.len();
        if size == 0 || len < size {
            return None;
        }
        let windows = (0..=len - size)
            .step_by(step.max(1))
            .map(|start| self.view_range(start, start + size))
            .collect();
        Some(windows)
    }

    /// Returns the last element and a copy of the remaining ones.
    pub fn pop(&self) -> (Option<T>, Seq<'a, T>)
    where
        T: Clone,
    {
        match self.items().split_last() {
            Some((last, rest)) => (Some(last.clone()), self.derive(rest.to_vec())),
            None => (None, self.derive(Vec::new())),
        }
    }

    /// Splits off the last `n` elements.
    ///
    /// Returns `(popped, remainder)` as views, with `popped` in original order. `n == 0`
    /// pops nothing and returns an absent `popped`; `n >= len` pops everything.
    pub fn pop_n(&self, n: usize) -> (Seq<'_, T>, Seq<'_, T>) {
        let len = self.len();
        if n == 0 {
            return (Seq::absent(), self.view_range(0, len));
        }
        let split = len - n.min(len);
        (self.view_range(split, len), self.view_range(0, split))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[i32]) -> Seq<'static, i32> {
        Seq::copy_of(items)
    }

    #[test]
    fn take_positive_negative_and_zero() {
        let s = seq(&[1, 2, 3, 4, 5]);
        assert_eq!(s.take(2).items(), &[1, 2]);
        assert_eq!(s.take(10).items(), &[1, 2, 3, 4, 5]);
        assert_eq!(s.take(-2).items(), &[4, 5]);
        assert_eq!(s.take(-10).items(), &[1, 2, 3, 4, 5]);
        assert!(s.take(0).is_empty());
        assert!(!s.take(0).is_absent());
        assert!(seq(&[]).take(3).is_empty());
    }

    #[test]
    fn take_returns_a_copy() {
        let source = vec![1, 2, 3];
        let s = Seq::view(&source);
        let taken = s.take(2);
        assert_eq!(taken.items(), &[1, 2]);
        assert!(!taken.is_aliased());
        assert!(!std::ptr::eq(&taken.items()[0], &source[0]));
    }

    #[test]
    fn skip_family_returns_views() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let skipped = s.skip(2);
        assert_eq!(skipped.items(), &[3, 4, 5]);
        assert!(skipped.is_aliased());
        assert!(std::ptr::eq(&skipped.items()[0], &s.items()[2]));

        assert_eq!(s.skip(0).items(), s.items());
        assert!(s.skip(5).is_empty());
        assert!(s.skip(50).is_empty());
        assert_eq!(s.skip_last(2).items(), &[1, 2, 3]);
        assert!(s.skip_last(9).is_empty());
        assert_eq!(s.take_last(2).items(), &[4, 5]);
        assert_eq!(s.take_last(0).items(), &[] as &[i32]);
        assert_eq!(s.take_last(9).items(), &[1, 2, 3, 4, 5]);
        assert_eq!(s.first_n(2).items(), &[1, 2]);
        assert_eq!(s.first_n(20).len(), 5);
    }

    #[test]
    fn views_of_absent_stay_absent() {
        let absent = Seq::<i32>::absent();
        assert!(absent.skip(1).is_absent());
        assert!(absent.take_last(1).is_absent());
        assert!(absent.take(2).is_absent());
        assert!(absent.after(|_| true).is_absent());
        assert!(absent.before(|_| true).is_absent());
    }

    #[test]
    fn slice_is_clamped() {
        let s = seq(&[1, 2, 3, 4, 5]);
        assert_eq!(s.slice(1..3).items(), &[2, 3]);
        assert_eq!(s.slice(3..).items(), &[4, 5]);
        assert_eq!(s.slice(..=1).items(), &[1, 2]);
        assert_eq!(s.slice(4..100).items(), &[5]);
        assert!(s.slice(10..20).is_empty());
    }

    #[test]
    fn before_and_after() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let before = s.before(|x| *x == 3);
        assert_eq!(before.items(), &[1, 2]);
        assert!(!before.is_aliased());
        assert_eq!(s.before(|x| *x == 9).items(), &[1, 2, 3, 4, 5]);

        let after = s.after(|x| *x == 3);
        assert_eq!(after.items(), &[4, 5]);
        assert!(after.is_aliased());
        assert!(s.after(|x| *x == 9).is_empty());
        assert!(s.after(|x| *x == 5).is_empty());
    }

    #[test]
    fn take_until() {
        let s = seq(&[1, 2, 3, 2, 1]);
        assert_eq!(s.take_until(&3).items(), &[1, 2]);
        assert_eq!(s.take_until(&9).items(), &[1, 2, 3, 2, 1]);
        assert!(s.take_until(&1).is_empty());
        assert_eq!(s.take_until_fn(|x| *x > 1).items(), &[1]);
    }

    #[test]
    fn chunk_splits_into_views() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let chunks = s.chunk(2).unwrap();
        let chunks: Vec<&[i32]> = chunks.iter().map(|c| c.items()).collect();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);

        let chunks = s.chunk(2).unwrap();
        assert!(std::ptr::eq(&chunks[1].items()[0], &s.items()[2]));
    }

    #[test]
    fn chunk_invalid_size_is_absent() {
        assert!(seq(&[1, 2, 3]).chunk(0).is_none());
        assert_eq!(seq(&[]).chunk(3).map(|c| c.len()), Some(0));
        assert_eq!(seq(&[1, 2]).chunk(5).map(|c| c.len()), Some(1));
    }

    #[test]
    fn window_steps_and_omits_short_tail() {
        let s = seq(&[1, 2, 3, 4, 5]);
        let windows = s.window(3, 1).unwrap();
        let windows: Vec<&[i32]> = windows.iter().map(|w| w.items()).collect();
        assert_eq!(windows, vec![&[1, 2, 3][..], &[2, 3, 4][..], &[3, 4, 5][..]]);

        let windows = s.window(2, 2).unwrap();
        let windows: Vec<&[i32]> = windows.iter().map(|w| w.items()).collect();
        assert_eq!(windows, vec![&[1, 2][..], &[3, 4][..]]);

        let windows = s.window(2, 0).unwrap();
        assert_eq!(windows.len(), 4);
        assert_eq!(s.window(5, 1).map(|w| w.len()), Some(1));
    }

    #[test]
    fn window_invalid_requests_are_absent() {
        let s = seq(&[1, 2, 3]);
        assert!(s.window(0, 1).is_none());
        assert!(s.window(4, 1).is_none());
        assert!(seq(&[]).window(1, 1).is_none());
    }

    #[test]
    fn pop_returns_last_and_copied_remainder() {
        let s = seq(&[1, 2, 3]);
        let (last, rest) = s.pop();
        assert_eq!(last, Some(3));
        assert_eq!(rest.items(), &[1, 2]);
        assert!(!rest.is_aliased());
        assert_eq!(s.len(), 3);

        let (last, rest) = seq(&[]).pop();
        assert_eq!(last, None);
        assert!(rest.is_empty());
        assert!(!rest.is_absent());
    }

    #[test]
    fn pop_n_edge_cases() {
        let s = seq(&[1, 2, 3, 4]);
        let (popped, rest) = s.pop_n(2);
        assert_eq!(popped.items(), &[3, 4]);
        assert_eq!(rest.items(), &[1, 2]);

        let (popped, rest) = s.pop_n(0);
        assert!(popped.is_absent());
        assert_eq!(rest.items(), &[1, 2, 3, 4]);

        let (popped, rest) = s.pop_n(10);
        assert_eq!(popped.items(), &[1, 2, 3, 4]);
        assert!(rest.is_empty());
    }
}
