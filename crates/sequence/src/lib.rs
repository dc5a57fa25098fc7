//! Fluent query and aggregation over in-memory sequences.
//!
//! This crate provides a single wrapper type and its supporting pieces:
//! - [`SequenceHandler`] owning an ordered, duplicate-permitting sequence
//! - Eager transformations (filter, map, prefix/suffix slicing, stable ordering)
//! - Numeric folds and seeded extremum scans
//! - Fixed-arity projection records [`Anon1`] through [`Anon4`]
//!
//! Every transformation returns a new handler; only the explicit mutation
//! methods (`add`, `remove`, `intersect`, ...) change the receiver.

pub mod aggregate;
pub mod error;
pub mod handler;
pub mod num;
pub mod projection;
pub mod query;

pub use error::{Result, SequenceError};
pub use handler::SequenceHandler;
pub use num::{Numeric, SortKey};
pub use projection::{Anon1, Anon2, Anon3, Anon4};
