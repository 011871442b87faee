//! Backing storage for seqkit containers.
//!
//! A [`Backing`] is either absent, a read-only view into storage owned elsewhere, an
//! attached caller-owned region, or an exclusively owned vector. The variant decides
//! whether a write lands in the caller's memory or in a private copy:
//!
//! - Reads never copy.
//! - In-place writes go through [`Backing::make_mut`]. Attached regions are written
//!   through; shared views are first detached into owned storage (copy-on-write).
//! - Growth goes through [`Backing::extend_from_slice`] and [`Backing::insert_front`].
//!   An attached vector grows in place while it has spare capacity; otherwise a new,
//!   exactly sized region is allocated and the storage stops aliasing the caller.

use std::fmt;
use std::ops::{Bound, RangeBounds};

/// Storage cell of a sequence container.
pub enum Backing<'a, T> {
    /// No storage at all. Reads as an empty slice, but is distinct from empty storage.
    Absent,
    /// Read-only view into storage owned elsewhere.
    Shared(&'a [T]),
    /// Attached caller slice. Writes land in the caller's memory; it cannot grow.
    Borrowed(&'a mut [T]),
    /// Attached caller vector. Writes, and growth within spare capacity, land in the
    /// caller's vector.
    Attached(&'a mut Vec<T>),
    /// Exclusively owned storage.
    Owned(Vec<T>),
}

impl<'a, T> Backing<'a, T> {
    /// Returns the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Backing::Absent => &[],
            Backing::Shared(s) => s,
            Backing::Borrowed(s) => &**s,
            Backing::Attached(v) => v.as_slice(),
            Backing::Owned(v) => v.as_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Backing::Absent)
    }

    /// Returns `true` if writes through this storage are visible to another holder.
    pub fn is_aliased(&self) -> bool {
        matches!(
            self,
            Backing::Shared(_) | Backing::Borrowed(_) | Backing::Attached(_)
        )
    }

    /// Number of elements the storage can hold without reallocating.
    ///
    /// Slices and views have no room beyond their length.
    pub fn capacity(&self) -> usize {
        match self {
            Backing::Absent => 0,
            Backing::Shared(s) => s.len(),
            Backing::Borrowed(s) => s.len(),
            Backing::Attached(v) => v.capacity(),
            Backing::Owned(v) => v.capacity(),
        }
    }

    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Returns a read-only view of a sub-range of the elements.
    ///
    /// A view of absent storage is absent.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn view<R>(&self, range: R) -> Backing<'_, T>
    where
        R: RangeBounds<usize>,
    {
        if self.is_absent() {
            return Backing::Absent;
        }
        let items = self.as_slice();
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => items.len(),
        };
        assert!(start <= end && end <= items.len(), "view out of bounds");
        Backing::Shared(&items[start..end])
    }

    /// Returns the elements for in-place modification.
    ///
    /// Attached regions are returned as is, so writes reach the caller. A shared view
    /// is first detached into owned storage. Absent storage yields an empty slice and
    /// stays absent.
    pub fn make_mut(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        self.detach_shared();
        match self {
            Backing::Borrowed(s) => &mut **s,
            Backing::Attached(v) => v.as_mut_slice(),
            Backing::Owned(v) => v.as_mut_slice(),
            // shared views were detached above
            Backing::Absent | Backing::Shared(_) => &mut [],
        }
    }

    /// Returns a growable vector backing this storage.
    ///
    /// An attached vector is returned as is. Any other variant is replaced by an owned
    /// copy of its elements first.
    pub fn make_growable(&mut self) -> &mut Vec<T>
    where
        T: Clone,
    {
        if !matches!(self, Backing::Attached(_) | Backing::Owned(_)) {
            log::trace!(
                "copying {} elements into growable owned storage",
                self.len()
            );
            *self = Backing::Owned(self.as_slice().to_vec());
        }
        match self {
            Backing::Attached(v) => &mut **v,
            Backing::Owned(v) => v,
            _ => unreachable!("storage was made growable above"),
        }
    }

    /// Appends `values` after the existing elements.
    ///
    /// The append happens in place when the storage is a vector with enough spare
    /// capacity (an attached vector then grows in the caller's memory). Otherwise a new
    /// region of exactly `len + values.len()` elements is allocated and replaces the
    /// current storage. Appending nothing leaves the storage untouched, absent included.
    ///
    /// Returns `true` if no reallocation took place.
    pub fn extend_from_slice(&mut self, values: &[T]) -> bool
    where
        T: Clone,
    {
        if values.is_empty() {
            return true;
        }
        let spare = self.spare_capacity();
        match self {
            Backing::Attached(v) if spare >= values.len() => {
                v.extend_from_slice(values);
                true
            }
            Backing::Owned(v) if spare >= values.len() => {
                v.extend_from_slice(values);
                true
            }
            _ => {
                let current = self.as_slice();
                let mut grown = Vec::with_capacity(current.len() + values.len());
                grown.extend_from_slice(current);
                grown.extend_from_slice(values);
                log::trace!(
                    "reallocated storage from {} to {} elements",
                    current.len(),
                    grown.len()
                );
                *self = Backing::Owned(grown);
                false
            }
        }
    }

    /// Inserts `values` before the existing elements.
    ///
    /// An attached vector is modified in place; other storage is first copied into an
    /// owned vector.
    pub fn insert_front(&mut self, values: &[T])
    where
        T: Clone,
    {
        if values.is_empty() {
            return;
        }
        let vec = self.make_growable();
        vec.splice(0..0, values.iter().cloned());
    }

    /// Copies the elements out, or returns `None` for absent storage.
    pub fn to_vec_opt(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        match self {
            Backing::Absent => None,
            other => Some(other.as_slice().to_vec()),
        }
    }

    /// Converts into an owned vector, copying unless the storage is already owned.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Backing::Owned(v) => v,
            other => other.as_slice().to_vec(),
        }
    }

    fn detach_shared(&mut self)
    where
        T: Clone,
    {
        if let Backing::Shared(s) = *self {
            log::trace!("detaching shared view of {} elements", s.len());
            *self = Backing::Owned(s.to_vec());
        }
    }
}

impl<T> Default for Backing<'_, T> {
    fn default() -> Self {
        Backing::Absent
    }
}

impl<T> From<Vec<T>> for Backing<'_, T> {
    fn from(vec: Vec<T>) -> Self {
        Backing::Owned(vec)
    }
}

impl<T: fmt::Debug> fmt::Debug for Backing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backing::Absent => return f.write_str("Absent"),
            Backing::Shared(_) => "Shared",
            Backing::Borrowed(_) => "Borrowed",
            Backing::Attached(_) => "Attached",
            Backing::Owned(_) => "Owned",
        };
        f.debug_tuple(name).field(&self.as_slice()).finish()
    }
}
