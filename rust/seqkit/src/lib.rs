//! Fluent, typed operations over ordered sequences.
//!
//! The crate is built around [`Seq`], an ordered container that either borrows its
//! storage from the caller or owns it. Operations are eager and chainable; each one is
//! documented as producing a view, a copy, or an in-place change.
//!
//! # Core Concepts
//!
//! ## Views, copies and in-place writes
//!
//! [`Seq::attach`] wraps a caller vector without copying, so in-place operations such as
//! `sort` or `transform` write through to it. [`Seq::copy_of`] takes an independent copy.
//! Slicing operations (`skip`, `take_last`, `chunk`, `window`, ...) return views tied to
//! the source by the borrow checker, while filtering, mapping, set operations and
//! grouping always allocate fresh storage.
//!
//! ## Absent versus empty
//!
//! A sequence may be absent, which is distinct from empty. Operations deriving a result
//! from an absent sequence keep it absent where that is meaningful, and the difference
//! survives serialization (`null` vs `[]`).
//!
//! ## Free functions
//!
//! Operations that introduce a new type beyond the element type (for example
//! [`map_to`], [`reduce`], [`max_by`], [`to_map`] and [`zip`]) are free functions taking
//! the sequence as their first argument.
//!
//! ## Randomness
//!
//! [`Seq::shuffle`] draws from a process-wide [`RandomSource`] that tests can replace with
//! [`set_random_source`] or [`seed_random_source`]. [`Seq::shuffle_with`] takes an
//! explicit source instead.
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Seq`], [`Pair`] and [`Tuple`],
//!   and the [`json`] helpers.

pub mod aggregate;
pub mod grouping;
#[cfg(feature = "serde")]
pub mod json;
pub mod numeric;
pub mod ordering;
pub mod pair;
pub mod query;
pub mod random;
pub mod seq;
pub mod set_ops;
pub mod slicing;
pub mod transform;

pub use aggregate::{count_by, max, max_by, min, min_by, reduce};
pub use grouping::{from_map, group_by, group_by_vec, to_map, to_map_kv, zip, zip_with};
pub use numeric::Numeric;
pub use pair::{Pair, Tuple};
pub use random::{RandomSource, reset_random_source, seed_random_source, set_random_source};
pub use seq::Seq;
pub use set_ops::{difference, intersect, symmetric_difference, union, unique_by};
pub use transform::{map_to, pipe, pluck};

pub use ahash::HashMap;
pub use seqkit_common::{Result, error::Error, error::ErrorKind};
