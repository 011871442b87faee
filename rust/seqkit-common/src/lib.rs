//! Core definitions shared by all seqkit-* crates.

pub mod error;
pub mod result;

pub use result::Result;
