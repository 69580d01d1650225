//! Ordering of whole intervals, plus the deprecated scalar-comparison
//! bridge.

use std::cmp::Ordering;

use crate::domain::Domain;
use crate::interval::Interval;
use crate::ord::{before, lower_rank, upper_rank};

/// `Interval` only ever satisfies a partial, boundary-aware order: `I < J`
/// means "every atomic of `I` lies entirely before every atomic of `J`",
/// and `I <= J` additionally allows `I` and `J` to share the same upper
/// reach. This is not a total order and not transitive with equality in
/// the way `Ord` would require, so `Interval` implements `PartialOrd` only.
/// Either operand being empty makes every comparison FALSE.
impl<T: Domain> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if self.lt(other) {
            return Some(Ordering::Less);
        }
        if other.lt(self) {
            return Some(Ordering::Greater);
        }
        None
    }

    fn lt(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        before(&self.upper(), self.right(), &other.lower(), other.left())
    }

    fn le(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.lt(other) || upper_rank(&self.upper(), self.right(), &other.upper(), other.right()) != Ordering::Greater
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    /// `>=` is not simply `le` with the operands swapped: it compares
    /// **lower** bounds the way `<=` compares **upper** bounds, so `I >= J`
    /// can hold even when `J <= I` does not (e.g. `closed(1,2) >=
    /// closed(0,1) | closed(2,3)` is TRUE while the reverse `<=` is FALSE).
    fn ge(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.lt(self) || lower_rank(&self.lower(), self.left(), &other.lower(), other.left()) != Ordering::Less
    }
}

/// Deprecated: comparing an interval against a bare scalar treats the
/// scalar as a singleton and logs a warning. Prefer [`crate::ops::Contains`].
impl<T: Domain> PartialEq<T> for Interval<T> {
    fn eq(&self, other: &T) -> bool {
        log::warn!("comparing an Interval to a scalar is deprecated; use Contains instead");
        self == &Interval::singleton(other.clone())
    }
}

/// Deprecated: see the [`PartialEq<T>`] impl above.
impl<T: Domain> PartialOrd<T> for Interval<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        log::warn!("comparing an Interval to a scalar is deprecated; use Contains instead");
        self.partial_cmp(&Interval::singleton(other.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::union::Union;

    #[test]
    fn test_strictly_before() {
        assert!(Interval::closed(0, 1) < Interval::closed(2, 3));
        assert!(!(Interval::closed(0, 1) < Interval::closed(1, 2)));
    }

    #[test]
    fn test_le_allows_shared_upper_reach() {
        assert!(Interval::closed(0, 1) <= Interval::closed(0, 1));
        assert!(Interval::open(0, 1) <= Interval::closed(0, 1));
        assert!(!(Interval::closed(0, 1) <= Interval::open(0, 1)));
    }

    #[test]
    fn test_empty_is_incomparable() {
        let e = Interval::<i32>::empty();
        let a = Interval::closed(0, 1);
        assert!(!(e < a));
        assert!(!(a < e));
        assert!(!(e <= a));
        assert!(!(e >= a));
    }

    #[test]
    fn test_multi_atomic_uses_enclosure_edges() {
        let a = Interval::closed(0, 1).union(&Interval::closed(5, 6));
        let b = Interval::closed(10, 11);
        assert!(a < b);
    }

    #[test]
    fn test_ge_is_not_le_with_operands_swapped() {
        let i2 = Interval::closed(1, 2);
        let i4 = Interval::closed(0, 1).union(&Interval::closed(2, 3));
        assert!(i2 >= i4);
        assert!(!(i4 >= i2));
    }

    #[test]
    fn test_ge_edge_case() {
        assert!(!(Interval::closed(0, 2) >= Interval::open(0, 1)));
    }

    #[test]
    fn test_scalar_comparison_treats_scalar_as_singleton() {
        let a = Interval::singleton(5);
        assert_eq!(a, 5);
        assert!(a <= 5);
    }
}
