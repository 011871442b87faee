//! The sequence container, its construction and element access.

use std::fmt;

use seqkit_backing::Backing;

/// An ordered sequence of `T` with chainable, eager operations.
///
/// A `Seq` either borrows its storage from the caller or owns it, and every operation
/// documents which kind of result it produces:
///
/// - **Views** (`skip`, `take_last`, `after`, `chunk`, `window`, ...) borrow a sub-range
///   of this sequence's storage. No elements are copied; call [`Seq::detach`] to obtain
///   independent storage.
/// - **Copies** (`take`, `before`, `filter`, `map`, set operations, ...) allocate new,
///   exclusively owned storage.
/// - **In-place** operations (`sort`, `reverse`, `transform`, `prepend`, `concat`) write
///   through to attached caller storage. A read-only view is detached into owned storage
///   before its first in-place write.
///
/// A sequence may be *absent* (no storage at all), which is distinct from *empty*.
/// Operations that would derive an empty result from an absent input return an absent
/// result, so the distinction survives a chain of calls (it shows up as `null` vs `[]`
/// when serialized). Equality compares elements only.
///
/// Views are tied to the source by the borrow checker, so mutating a source while a
/// view of it is alive (from any thread) is rejected at compile time.
pub struct Seq<'a, T> {
    items: Backing<'a, T>,
}

impl<'a, T> Seq<'a, T> {
    /// Returns an absent sequence.
    pub fn absent() -> Self {
        Seq {
            items: Backing::Absent,
        }
    }

    /// Returns an empty, present sequence.
    pub fn new() -> Self {
        Seq {
            items: Backing::Owned(Vec::new()),
        }
    }

    /// Wraps a caller vector without copying.
    ///
    /// In-place operations write into `items`, and growth within its spare capacity
    /// changes its length. Growth beyond the capacity moves the sequence to new storage
    /// and leaves `items` as it was at that point.
    pub fn attach(items: &'a mut Vec<T>) -> Self {
        Seq {
            items: Backing::Attached(items),
        }
    }

    /// Wraps a caller slice without copying. In-place operations write into `items`.
    pub fn attach_slice(items: &'a mut [T]) -> Self {
        Seq {
            items: Backing::Borrowed(items),
        }
    }

    /// Like [`Seq::attach`], but `None` produces an absent sequence.
    pub fn attach_opt(items: Option<&'a mut Vec<T>>) -> Self {
        match items {
            Some(items) => Seq::attach(items),
            None => Seq::absent(),
        }
    }

    /// Wraps a caller slice read-only, without copying.
    pub fn view(items: &'a [T]) -> Self {
        Seq {
            items: Backing::Shared(items),
        }
    }

    /// Takes ownership of `items` without copying.
    pub fn from_vec(items: Vec<T>) -> Self {
        Seq {
            items: Backing::Owned(items),
        }
    }

    /// Copies `items` into new, exclusively owned storage.
    pub fn copy_of(items: &[T]) -> Self
    where
        T: Clone,
    {
        Seq::from_vec(items.to_vec())
    }

    /// Like [`Seq::copy_of`], but `None` produces an absent sequence.
    pub fn copy_of_opt(items: Option<&[T]>) -> Self
    where
        T: Clone,
    {
        match items {
            Some(items) => Seq::copy_of(items),
            None => Seq::absent(),
        }
    }

    /// Returns the live elements. No copy is made.
    #[inline]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns the live elements for modification.
    ///
    /// Writes reach attached caller storage. A read-only view is detached first.
    pub fn items_mut(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        self.items.make_mut()
    }

    /// Returns an independent copy of the elements.
    pub fn items_copy(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items().to_vec()
    }

    /// Converts into a vector, copying unless the storage is already owned.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.into_vec()
    }

    /// Copies this sequence (view or not) into exclusively owned storage.
    pub fn detach(&self) -> Seq<'a, T>
    where
        T: Clone,
    {
        match self.items.to_vec_opt() {
            Some(items) => Seq::from_vec(items),
            None => Seq::absent(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements the storage can hold before growing reallocates.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.items.is_absent()
    }

    /// Returns `true` if the storage is shared with, or borrowed from, another holder.
    pub fn is_aliased(&self) -> bool {
        self.items.is_aliased()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    pub(crate) fn backing_mut(&mut self) -> &mut Backing<'a, T> {
        &mut self.items
    }

    /// Wraps `items` derived from this sequence, keeping an absent input absent.
    pub(crate) fn derive(&self, items: Vec<T>) -> Seq<'a, T> {
        if self.is_absent() {
            Seq::absent()
        } else {
            Seq::from_vec(items)
        }
    }

    /// Returns a view of `start..end`, keeping an absent input absent.
    ///
    /// Callers clamp the bounds.
    pub(crate) fn view_range(&self, start: usize, end: usize) -> Seq<'_, T> {
        Seq {
            items: self.items.view(start..end),
        }
    }
}

impl<T> Default for Seq<'_, T> {
    fn default() -> Self {
        Seq::absent()
    }
}

/// Cloning keeps read-only views shared; attached and owned storage is copied, since
/// only one holder may write to it.
impl<'a, T: Clone> Clone for Seq<'a, T> {
    fn clone(&self) -> Self {
        match &self.items {
            Backing::Absent => Seq::absent(),
            Backing::Shared(items) => Seq::view(*items),
            other => Seq::copy_of(other.as_slice()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seq").field(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for Seq<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items() == other.items()
    }
}

impl<T: Eq> Eq for Seq<'_, T> {}

impl<T> AsRef<[T]> for Seq<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.items()
    }
}

impl<'s, T> IntoIterator for &'s Seq<'_, T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items().iter()
    }
}

impl<T> From<Vec<T>> for Seq<'_, T> {
    fn from(items: Vec<T>) -> Self {
        Seq::from_vec(items)
    }
}

impl<T> From<Option<Vec<T>>> for Seq<'_, T> {
    fn from(items: Option<Vec<T>>) -> Self {
        match items {
            Some(items) => Seq::from_vec(items),
            None => Seq::absent(),
        }
    }
}

impl<T> FromIterator<T> for Seq<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::from_vec(iter.into_iter().collect())
    }
}
