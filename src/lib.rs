//! `spanset` represents arbitrary unions of one-dimensional intervals over
//! any totally ordered domain, as a single canonicalized [`Interval`]
//! type, with a full complement of set-algebraic operations,
//! transformations, indexing, and textual rendering.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod atomic;
pub mod bound;
mod canon;
mod cmp;
pub mod domain;
mod display;
pub mod error;
pub mod factory;
mod hash;
mod index;
pub mod interval;
pub mod limit;
mod ord;
pub mod ops;
pub mod transform;

#[cfg(test)]
mod proptests;

pub use atomic::Atomic;
pub use bound::{BoundType, Side};
pub use domain::Domain;
pub use error::SpanError;
pub use factory::{closed, closedopen, empty, inf, open, openclosed, singleton, CLOSED, OPEN};
pub use interval::Interval;
pub use limit::{Limit, RecognizesInfinity};

pub use ops::{Adjacent, Complement, Contains, Difference, Intersection, Overlaps, Union};
pub use transform::{ApplyOutcome, Replace, Replacement};
