//! Containment.

use std::any::Any;

use crate::domain::Domain;
use crate::error::SpanError;
use crate::interval::Interval;
use crate::ops::intersection::Intersection;

pub trait Contains<Rhs> {
    fn contains(&self, rhs: Rhs) -> bool;
}

impl<T: Domain> Contains<&T> for Interval<T> {
    /// TRUE iff some atomic of `self` covers the scalar `x`. `±inf` are
    /// never contained, since no atomic's bounds can ever equal them.
    fn contains(&self, x: &T) -> bool {
        self.atomics().any(|a| a.contains(x))
    }
}

impl<T: Domain> Contains<&Interval<T>> for Interval<T> {
    /// TRUE iff every atomic of `other` is covered by some atomic of
    /// `self`. The empty interval is contained in every interval,
    /// including itself; no non-empty interval is contained in the empty
    /// interval except the empty one.
    fn contains(&self, other: &Interval<T>) -> bool {
        &self.intersection(other) == other
    }
}

impl<T: Domain + 'static> Interval<T> {
    /// Dynamically-typed containment bridge, for callers juggling
    /// heterogeneous domains through `dyn Any`. Rust's static typing
    /// already resolves the ordinary same-type case at compile time; this
    /// exists for the genuinely dynamic case, where a type mismatch is
    /// reported as an error rather than silently treated as non-membership.
    pub fn contains_any(&self, value: &dyn Any) -> Result<bool, SpanError> {
        match value.downcast_ref::<T>() {
            Some(v) => Ok(self.contains(v)),
            None => Err(SpanError::TypeMismatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::union::Union;

    #[test]
    fn test_scalar_containment() {
        let i = Interval::closed(0, 1).union(&Interval::closed(2, 3));
        assert!(i.contains(&0));
        assert!(i.contains(&2));
        assert!(!i.contains(&15));
    }

    #[test]
    fn test_infinity_never_contained() {
        let all: Interval<f64> = Interval::closed(crate::limit::Limit::NegInf, crate::limit::Limit::PosInf);
        assert!(!all.contains(&f64::INFINITY));
        assert!(!all.contains(&f64::NEG_INFINITY));
        assert!(all.contains(&0.0));
    }

    #[test]
    fn test_empty_contained_everywhere() {
        let e = Interval::<i32>::empty();
        let a = Interval::closed(0, 1);
        assert!(a.contains(&e));
        assert!(e.contains(&e));
        assert!(!e.contains(&a));
    }

    #[test]
    fn test_contains_any() {
        let i = Interval::closed(0, 10);
        let boxed: Box<dyn Any> = Box::new(5i32);
        assert_eq!(i.contains_any(boxed.as_ref()), Ok(true));

        let mismatched: Box<dyn Any> = Box::new("nope");
        assert_eq!(i.contains_any(mismatched.as_ref()), Err(SpanError::TypeMismatch));
    }
}
