//! Numeric sequences: arithmetic and order statistics over integer and float elements.
//!
//! Neutral aggregates (`sum`, `avg`) return zero for an empty sequence, since a neutral
//! value exists. `min`, `max`, `median` and `mode` return `None` instead: there is no
//! meaningful minimum of nothing.

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, ToPrimitive};

use crate::Seq;

/// Element types usable in numeric sequences.
///
/// Besides arithmetic, a numeric type provides a total order, so `median` and `mode`
/// never depend on a partial comparison. Floats use IEEE 754 `totalOrder`: `-0.0`
/// sorts before `0.0` and NaNs sort after every number.
pub trait Numeric: Num + ToPrimitive + Copy + PartialOrd + Debug {
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Addition that wraps around at the type's bounds instead of overflowing.
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_numeric_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_for_float!(f32, f64);

impl<'a, T: Numeric> Seq<'a, T> {
    /// [`Seq::attach`] restricted to numeric elements.
    pub fn attach_numeric(items: &'a mut Vec<T>) -> Self {
        Seq::attach(items)
    }

    /// [`Seq::copy_of`] restricted to numeric elements.
    pub fn copy_of_numeric(items: &[T]) -> Self {
        Seq::copy_of(items)
    }

    /// Sum of the elements; zero for an empty sequence.
    ///
    /// Integer sums wrap around on overflow.
    pub fn sum(&self) -> T {
        self.iter()
            .fold(T::zero(), |acc, &item| Numeric::wrapping_add(acc, item))
    }

    /// Arithmetic mean as `f64`; `0.0` for an empty sequence.
    ///
    /// An empty sequence and a sequence of zeros both average to `0.0`; check
    /// [`Seq::count`] when the difference matters. Elements are accumulated as `f64`,
    /// so the mean of a narrow integer type cannot overflow.
    pub fn avg(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f64 = self.iter().map(as_f64).sum();
        total / self.len() as f64
    }

    /// Smallest element under `PartialOrd`; the first one on ties.
    ///
    /// `-0.0` and `0.0` tie, and an incomparable element (NaN) never replaces the
    /// current candidate, matching [`min`](crate::min).
    pub fn min(&self) -> Option<T> {
        self.extremum(|item, best| item < best)
    }

    /// Largest element under `PartialOrd`; the first one on ties.
    pub fn max(&self) -> Option<T> {
        self.extremum(|item, best| item > best)
    }

    /// Middle element of a sorted copy, or the mean of the two middle elements for an
    /// even count. The sequence itself is not reordered.
    pub fn median(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let mut sorted = self.items_copy();
        sorted.sort_by(<T as Numeric>::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            as_f64(&sorted[mid])
        } else {
            (as_f64(&sorted[mid - 1]) + as_f64(&sorted[mid])) / 2.0
        };
        Some(median)
    }

    /// All values tied for the highest frequency, in first-seen order.
    ///
    /// Returns `None` (not an empty list) for an empty sequence.
    pub fn mode(&self) -> Option<Vec<T>> {
        struct Run<T> {
            value: T,
            first_seen: usize,
            count: usize,
        }

        let mut indexed: Vec<(usize, T)> = self.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        let mut runs: Vec<Run<T>> = Vec::new();
        for (index, value) in indexed {
            match runs.last_mut() {
                Some(run) if run.value.total_cmp(&value) == Ordering::Equal => run.count += 1,
                _ => runs.push(Run {
                    value,
                    first_seen: index,
                    count: 1,
                }),
            }
        }

        let highest = runs.iter().map(|run| run.count).max()?;
        runs.retain(|run| run.count == highest);
        runs.sort_by_key(|run| run.first_seen);
        Some(runs.into_iter().map(|run| run.value).collect())
    }

    fn extremum(&self, better: impl Fn(&T, &T) -> bool) -> Option<T> {
        let mut items = self.iter().copied();
        let first = items.next()?;
        Some(items.fold(first, |best, item| {
            if better(&item, &best) { item } else { best }
        }))
    }
}

#[inline]
fn as_f64<T: Numeric>(value: &T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_avg() {
        let seq = Seq::copy_of_numeric(&[1, 2, 3, 4]);
        assert_eq!(seq.sum(), 10);
        assert_eq!(seq.avg(), 2.5);

        let empty = Seq::<i32>::new();
        assert_eq!(empty.sum(), 0);
        assert_eq!(empty.avg(), 0.0);
        assert_eq!(Seq::<f64>::absent().sum(), 0.0);
    }

    #[test]
    fn avg_of_narrow_integers_does_not_overflow() {
        let seq = Seq::from_vec(vec![200u8, 200, 200]);
        assert_eq!(seq.avg(), 200.0);
    }

    #[test]
    fn min_and_max() {
        let seq = Seq::copy_of_numeric(&[3.5, -1.0, 7.25, -1.0]);
        assert_eq!(seq.min(), Some(-1.0));
        assert_eq!(seq.max(), Some(7.25));
        assert_eq!(Seq::<i64>::new().min(), None);
        assert_eq!(Seq::<i64>::new().max(), None);
    }

    #[test]
    fn integer_sum_wraps_on_overflow() {
        assert_eq!(Seq::from_vec(vec![i32::MAX, 1]).sum(), i32::MIN);
        assert_eq!(Seq::from_vec(vec![u8::MAX, 2]).sum(), 1);
        assert_eq!(Seq::from_vec(vec![0.5f64, 0.25]).sum(), 0.75);
    }

    #[test]
    fn float_min_and_max_keep_the_first_tie() {
        let zeros = Seq::<f64>::from_vec(vec![0.0, -0.0]);
        assert!(zeros.min().is_some_and(|z| z.is_sign_positive()));
        assert!(zeros.max().is_some_and(|z| z.is_sign_positive()));

        let with_nan = Seq::from_vec(vec![1.0, f64::NAN, 3.0]);
        assert_eq!(with_nan.max(), Some(3.0));
        assert_eq!(with_nan.min(), Some(1.0));
        assert_eq!(with_nan.max(), crate::max(&with_nan).copied());
    }

    #[test]
    fn median_of_odd_even_and_empty() {
        assert_eq!(Seq::copy_of_numeric(&[3, 1, 2]).median(), Some(2.0));
        assert_eq!(Seq::copy_of_numeric(&[10, 2, 4, 6]).median(), Some(5.0));
        assert_eq!(Seq::<i32>::new().median(), None);
    }

    #[test]
    fn median_does_not_reorder_source() {
        let mut source = vec![9, 1, 5];
        let seq = Seq::attach_numeric(&mut source);
        assert_eq!(seq.median(), Some(5.0));
        assert_eq!(seq.items(), &[9, 1, 5]);
    }

    #[test]
    fn median_with_nan_does_not_panic() {
        let seq = Seq::from_vec(vec![1.0, f64::NAN, 2.0]);
        assert_eq!(seq.median(), Some(2.0));
    }

    #[test]
    fn mode_returns_all_ties_in_first_seen_order() {
        let seq = Seq::from_vec(vec![3, 1, 1, 2, 3, 2, 4]);
        assert_eq!(seq.mode(), Some(vec![3, 1, 2]));

        let single = Seq::from_vec(vec![5, 5, 1]);
        assert_eq!(single.mode(), Some(vec![5]));

        assert_eq!(Seq::<i32>::new().mode(), None);
        assert_eq!(Seq::<i32>::absent().mode(), None);
    }
}
