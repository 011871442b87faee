//! Element-wise transformation, side-effecting iteration, growth and repetition.

use crate::Seq;

impl<'a, T> Seq<'a, T> {
    /// Copies the elements satisfying `pred`.
    pub fn filter<F>(&self, mut pred: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let kept = self.iter().filter(|item| pred(item)).cloned().collect();
        self.derive(kept)
    }

    /// Copies the elements not satisfying `pred`.
    pub fn reject<F>(&self, mut pred: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.filter(|item| !pred(item))
    }

    /// Returns a new sequence of `f` applied to each element.
    pub fn map<F>(&self, f: F) -> Seq<'a, T>
    where
        F: FnMut(&T) -> T,
    {
        self.derive(self.iter().map(f).collect())
    }

    /// Calls `f` on each element and returns `self` unchanged.
    pub fn each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
        self
    }

    /// Replaces each element with `f` applied to it, in place.
    ///
    /// Writes reach attached caller storage; a read-only view is detached first.
    pub fn transform<F>(&mut self, mut f: F)
    where
        T: Clone,
        F: FnMut(&T) -> T,
    {
        for item in self.items_mut() {
            *item = f(item);
        }
    }

    /// Returns a new sequence with `values` after the existing elements.
    ///
    /// The source is never modified. Appending nothing to an absent sequence stays absent.
    pub fn append(&self, values: &[T]) -> Seq<'a, T>
    where
        T: Clone,
    {
        if self.is_absent() && values.is_empty() {
            return Seq::absent();
        }
        let mut items = Vec::with_capacity(self.len() + values.len());
        items.extend_from_slice(self.items());
        items.extend_from_slice(values);
        Seq::from_vec(items)
    }

    /// Alias of [`Seq::append`].
    pub fn push(&self, values: &[T]) -> Seq<'a, T>
    where
        T: Clone,
    {
        self.append(values)
    }

    /// Inserts `values` before the existing elements, in place, and returns `self`.
    ///
    /// An attached caller vector receives the values; any other storage is first copied
    /// into owned storage.
    pub fn prepend(&mut self, values: &[T]) -> &mut Self
    where
        T: Clone,
    {
        self.backing_mut().insert_front(values);
        self
    }

    /// Appends `values` and returns `self`.
    ///
    /// With enough spare capacity the values are written in place (into the caller's
    /// vector for an attached sequence), without allocating. Otherwise new storage of
    /// exactly the combined length is allocated. Concatenating nothing onto an absent
    /// sequence leaves it absent.
    pub fn concat(&mut self, values: &[T]) -> &mut Self
    where
        T: Clone,
    {
        self.backing_mut().extend_from_slice(values);
        self
    }

    /// Returns the elements repeated `n` times, in order. `n == 0` or an empty sequence
    /// yields an empty, present sequence.
    ///
    /// # Panics
    ///
    /// Panics if the result length would overflow `usize`, like [`slice::repeat`].
    pub fn multiply(&self, n: usize) -> Seq<'a, T>
    where
        T: Clone,
    {
        if self.is_empty() || n == 0 {
            return Seq::new();
        }
        let Some(total) = self.len().checked_mul(n) else {
            panic!("capacity overflow");
        };
        let mut items = Vec::with_capacity(total);
        for _ in 0..n {
            items.extend_from_slice(self.items());
        }
        Seq::from_vec(items)
    }

    /// Calls `f` with the whole sequence and returns it unchanged.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Builds a sequence of `count` elements from `f(1)` through `f(count)`.
    ///
    /// Note the indices are one-based.
    pub fn times<F>(count: usize, f: F) -> Seq<'a, T>
    where
        F: FnMut(usize) -> T,
    {
        Seq::from_vec((1..=count).map(f).collect())
    }
}

/// Returns a new sequence of `f` applied to each element, with a new element type.
pub fn map_to<'b, T, R, F>(seq: &Seq<'_, T>, f: F) -> Seq<'b, R>
where
    R: 'b,
    F: FnMut(&T) -> R,
{
    let mapped = seq.iter().map(f).collect();
    if seq.is_absent() {
        Seq::absent()
    } else {
        Seq::from_vec(mapped)
    }
}

/// Extracts a field from each element by cloning what `field` points to.
pub fn pluck<'b, T, R, F>(seq: &Seq<'_, T>, mut field: F) -> Seq<'b, R>
where
    R: Clone + 'b,
    F: FnMut(&T) -> &R,
{
    map_to(seq, |item| field(item).clone())
}

/// Passes the sequence to `f` and returns its result.
pub fn pipe<'a, T, R, F>(seq: Seq<'a, T>, f: F) -> R
where
    F: FnOnce(Seq<'a, T>) -> R,
{
    f(seq)
}
