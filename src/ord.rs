//! Boundary-point ordering.
//!
//! A left edge and a right edge carry different "which way is more
//! restrictive" meaning, so this is a pair of dedicated comparators rather
//! than one symmetric rank.

use std::cmp::Ordering;

use crate::bound::BoundType;
use crate::domain::Domain;
use crate::limit::Limit;

/// Order two lower bounds as sort keys: by value, then closed-before-open
/// at equal value.
pub(crate) fn lower_rank<T: Domain>(a: &Limit<T>, a_left: BoundType, b: &Limit<T>, b_left: BoundType) -> Ordering {
    match a.partial_cmp(b) {
        Some(Ordering::Equal) | None => match (a_left, b_left) {
            (BoundType::Closed, BoundType::Open) => Ordering::Less,
            (BoundType::Open, BoundType::Closed) => Ordering::Greater,
            _ => Ordering::Equal,
        },
        Some(ordering) => ordering,
    }
}

/// Order two upper bounds as sort keys: by value, then open-before-closed
/// at equal value -- a `CLOSED` upper reaches one point further than an
/// `OPEN` upper at the same value, so it ranks higher.
pub(crate) fn upper_rank<T: Domain>(a: &Limit<T>, a_right: BoundType, b: &Limit<T>, b_right: BoundType) -> Ordering {
    match a.partial_cmp(b) {
        Some(Ordering::Equal) | None => match (a_right, b_right) {
            (BoundType::Open, BoundType::Closed) => Ordering::Less,
            (BoundType::Closed, BoundType::Open) => Ordering::Greater,
            _ => Ordering::Equal,
        },
        Some(ordering) => ordering,
    }
}

/// TRUE iff the right edge of `(a_upper, a_right)` lies strictly before the
/// left edge of `(b_lower, b_left)` with no shared, included endpoint.
///
/// Two atomics sharing an endpoint are mergeable whenever *either* side
/// includes it: `closed(0,1).adjacent(open(1,2))` is `TRUE`, so a tie at
/// equal boundary values only counts as a gap when *both* sides are open.
pub(crate) fn before<T: Domain>(
    a_upper: &Limit<T>,
    a_right: BoundType,
    b_lower: &Limit<T>,
    b_left: BoundType,
) -> bool {
    match a_upper.partial_cmp(b_lower) {
        Some(Ordering::Less) => true,
        Some(Ordering::Equal) => a_right == BoundType::Open && b_left == BoundType::Open,
        _ => false,
    }
}
