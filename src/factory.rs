//! Free-function constructors and constants mirroring the named external
//! interface: `empty()`, `singleton(x)`, `open(a,b)`, `closed(a,b)`,
//! `openclosed(a,b)`, `closedopen(a,b)`, `OPEN`, `CLOSED`, `inf`.
//!
//! [`Interval`]'s own associated functions are the primary, idiomatic
//! entry point (`Interval::closed(0, 1)`); these free functions exist for
//! call sites that read better unqualified, e.g. after `use spanset::*`.

use crate::bound::BoundType;
use crate::domain::Domain;
use crate::interval::Interval;
use crate::limit::Limit;

pub const OPEN: BoundType = BoundType::Open;
pub const CLOSED: BoundType = BoundType::Closed;

/// The positive-infinity sentinel for `T`. Negate it (`-inf::<T>()`) for
/// the negative sentinel.
pub fn inf<T>() -> Limit<T> {
    Limit::PosInf
}

pub fn empty<T: Domain>() -> Interval<T> {
    Interval::empty()
}

pub fn singleton<T: Domain>(x: impl Into<Limit<T>>) -> Interval<T> {
    Interval::singleton(x)
}

pub fn open<T: Domain>(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Interval<T> {
    Interval::open(a, b)
}

pub fn closed<T: Domain>(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Interval<T> {
    Interval::closed(a, b)
}

pub fn openclosed<T: Domain>(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Interval<T> {
    Interval::open_closed(a, b)
}

pub fn closedopen<T: Domain>(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Interval<T> {
    Interval::closed_open(a, b)
}
