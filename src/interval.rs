//! `Interval<T>`: a canonicalized union of atomic intervals.

use crate::atomic::Atomic;
use crate::bound::BoundType;
use crate::canon::canonicalize;
use crate::domain::Domain;
use crate::error::SpanError;
use crate::limit::Limit;

/// An ordered sequence of disjoint, non-adjacent, non-empty atomics.
///
/// All public constructors and operators route through [`canonicalize`],
/// which is the sole producer of `Interval` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval<T> {
    pub(crate) atomics: Vec<Atomic<T>>,
}

impl<T: Domain> Interval<T> {
    /// The empty interval: `lower = +inf`, `upper = -inf`, `left = right =
    /// Open`.
    pub fn empty() -> Self {
        Self { atomics: Vec::new() }
    }

    pub fn singleton(x: impl Into<Limit<T>>) -> Self {
        Self::from_atomic(Atomic::singleton(x))
    }

    pub fn closed(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Self {
        Self::from_atomic(Atomic::closed(a, b))
    }

    pub fn open(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Self {
        Self::from_atomic(Atomic::open(a, b))
    }

    pub fn open_closed(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Self {
        Self::from_atomic(Atomic::open_closed(a, b))
    }

    pub fn closed_open(a: impl Into<Limit<T>>, b: impl Into<Limit<T>>) -> Self {
        Self::from_atomic(Atomic::closed_open(a, b))
    }

    /// Construct from a single raw quadruple, applying infinity
    /// normalization and the emptiness test.
    pub fn from_atomic(atomic: Atomic<T>) -> Self {
        if atomic.is_empty() {
            Self::empty()
        } else {
            Self { atomics: vec![atomic] }
        }
    }

    /// Construct from an arbitrary bag of atomics, canonicalizing.
    pub fn from_atomics(atomics: impl IntoIterator<Item = Atomic<T>>) -> Self {
        Self::new_canonical(atomics.into_iter().collect())
    }

    pub(crate) fn new_canonical(atomics: Vec<Atomic<T>>) -> Self {
        Self { atomics: canonicalize(atomics) }
    }

    /// TRUE iff the canonical sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.atomics.is_empty()
    }

    /// TRUE iff the sequence has length <= 1.
    pub fn is_atomic(&self) -> bool {
        self.atomics.len() <= 1
    }

    pub fn len(&self) -> usize {
        self.atomics.len()
    }

    fn first(&self) -> Option<&Atomic<T>> {
        self.atomics.first()
    }

    fn last(&self) -> Option<&Atomic<T>> {
        self.atomics.last()
    }

    pub fn left(&self) -> BoundType {
        self.first().map(|a| a.left()).unwrap_or(BoundType::Open)
    }

    pub fn right(&self) -> BoundType {
        self.last().map(|a| a.right()).unwrap_or(BoundType::Open)
    }

    pub fn lower(&self) -> Limit<T> {
        self.first().map(|a| a.lower().clone()).unwrap_or(Limit::PosInf)
    }

    pub fn upper(&self) -> Limit<T> {
        self.last().map(|a| a.upper().clone()).unwrap_or(Limit::NegInf)
    }

    /// The smallest single atomic containing every atomic of `self`.
    pub fn enclosure(&self) -> Atomic<T> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Atomic::new(first.left(), first.lower().clone(), last.upper().clone(), last.right()),
            _ => Atomic::new(BoundType::Open, Limit::PosInf, Limit::NegInf, BoundType::Open),
        }
    }

    /// Iterate the constituent atomics in canonical order.
    pub fn atomics(&self) -> impl Iterator<Item = &Atomic<T>> {
        self.atomics.iter()
    }

    /// Positional access; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::IndexOutOfRange`] if `index` is out of range in
    /// either direction.
    pub fn get(&self, index: isize) -> Result<&Atomic<T>, SpanError> {
        let len = self.atomics.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok().filter(|i| *i < len)
        };
        resolved
            .and_then(|i| self.atomics.get(i))
            .ok_or(SpanError::IndexOutOfRange { index, len })
    }
}

impl<T: Domain> Default for Interval<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Domain> From<Atomic<T>> for Interval<T> {
    fn from(atomic: Atomic<T>) -> Self {
        Self::from_atomic(atomic)
    }
}

impl<T: Domain> From<T> for Interval<T> {
    fn from(value: T) -> Self {
        Self::singleton(value)
    }
}
