//! Transformation primitives: `replace` and `apply`.

use crate::atomic::Atomic;
use crate::bound::BoundType;
use crate::domain::Domain;
use crate::interval::Interval;
use crate::limit::Limit;
use crate::ops::union::Union;

/// A per-field replacement: either a fixed value, or a function of the
/// current value.
pub enum Replacement<X> {
    Value(X),
    Func(Box<dyn Fn(X) -> X>),
}

impl<X> Replacement<X> {
    fn value(&self) -> Option<&X> {
        match self {
            Self::Value(v) => Some(v),
            Self::Func(_) => None,
        }
    }
}

/// Builder for [`Interval::replace`]. Each of the four sides may be left
/// untouched (`None`), set to a fixed value, or driven by a function of
/// the atomic's current value.
pub struct Replace<T> {
    left: Option<Replacement<BoundType>>,
    lower: Option<Replacement<Limit<T>>>,
    upper: Option<Replacement<Limit<T>>>,
    right: Option<Replacement<BoundType>>,
    ignore_inf: bool,
}

impl<T: Domain> Default for Replace<T> {
    fn default() -> Self {
        Self {
            left: None,
            lower: None,
            upper: None,
            right: None,
            ignore_inf: true,
        }
    }
}

impl<T: Domain> Replace<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, value: BoundType) -> Self {
        self.left = Some(Replacement::Value(value));
        self
    }

    pub fn left_fn(mut self, f: impl Fn(BoundType) -> BoundType + 'static) -> Self {
        self.left = Some(Replacement::Func(Box::new(f)));
        self
    }

    pub fn lower(mut self, value: impl Into<Limit<T>>) -> Self {
        self.lower = Some(Replacement::Value(value.into()));
        self
    }

    pub fn lower_fn(mut self, f: impl Fn(Limit<T>) -> Limit<T> + 'static) -> Self {
        self.lower = Some(Replacement::Func(Box::new(f)));
        self
    }

    pub fn upper(mut self, value: impl Into<Limit<T>>) -> Self {
        self.upper = Some(Replacement::Value(value.into()));
        self
    }

    pub fn upper_fn(mut self, f: impl Fn(Limit<T>) -> Limit<T> + 'static) -> Self {
        self.upper = Some(Replacement::Func(Box::new(f)));
        self
    }

    pub fn right(mut self, value: BoundType) -> Self {
        self.right = Some(Replacement::Value(value));
        self
    }

    pub fn right_fn(mut self, f: impl Fn(BoundType) -> BoundType + 'static) -> Self {
        self.right = Some(Replacement::Func(Box::new(f)));
        self
    }

    /// `ignore_inf` (default `true`): a value-function is not invoked when
    /// the current bound is `±inf`; the bound passes through unchanged so
    /// that a function written for finite values never has to special-case
    /// infinity.
    pub fn ignore_inf(mut self, ignore_inf: bool) -> Self {
        self.ignore_inf = ignore_inf;
        self
    }

    fn side(current: BoundType, repl: &Option<Replacement<BoundType>>) -> BoundType {
        match repl {
            None => current,
            Some(Replacement::Value(v)) => *v,
            Some(Replacement::Func(f)) => f(current),
        }
    }

    fn limit(current: &Limit<T>, repl: &Option<Replacement<Limit<T>>>, ignore_inf: bool) -> Limit<T> {
        match repl {
            None => current.clone(),
            Some(Replacement::Value(v)) => v.clone(),
            Some(Replacement::Func(f)) => {
                if ignore_inf && current.is_infinite() {
                    current.clone()
                } else {
                    f(current.clone())
                }
            }
        }
    }

    /// Apply this builder to `target`, re-canonicalizing the result.
    ///
    /// Each parameter is applied to *every* atomic of `target`
    /// independently. For the empty interval, only direct value arguments
    /// to `lower`/`upper` take effect; a `lower`/`upper` given only as a
    /// function leaves the interval empty, since there is no atomic for
    /// the function to act on.
    pub fn call(self, target: &Interval<T>) -> Interval<T> {
        if target.is_empty() {
            let has_bound_value = self.lower.as_ref().and_then(Replacement::value).is_some()
                || self.upper.as_ref().and_then(Replacement::value).is_some();
            if !has_bound_value {
                return Interval::empty();
            }
            let left = self.left.as_ref().and_then(Replacement::value).copied().unwrap_or(BoundType::Open);
            let lower = self.lower.as_ref().and_then(Replacement::value).cloned().unwrap_or(Limit::NegInf);
            let upper = self.upper.as_ref().and_then(Replacement::value).cloned().unwrap_or(Limit::PosInf);
            let right = self.right.as_ref().and_then(Replacement::value).copied().unwrap_or(BoundType::Open);
            return Interval::from_atomic(Atomic::new(left, lower, upper, right));
        }

        let atomics = target
            .atomics()
            .map(|a| {
                let left = Self::side(a.left(), &self.left);
                let lower = Self::limit(a.lower(), &self.lower, self.ignore_inf);
                let upper = Self::limit(a.upper(), &self.upper, self.ignore_inf);
                let right = Self::side(a.right(), &self.right);
                Atomic::new(left, lower, upper, right)
            })
            .collect();
        Interval::new_canonical(atomics)
    }
}

impl<T: Domain> Interval<T> {
    pub fn replace(&self) -> Replace<T> {
        Replace::new()
    }
}

/// The shape an `apply` closure may return for one atomic.
pub enum ApplyOutcome<T> {
    Quadruple(BoundType, Limit<T>, Limit<T>, BoundType),
    Atomic(Atomic<T>),
    Interval(Interval<T>),
}

impl<T: Domain> Interval<T> {
    /// `f` receives each atomic and returns a quadruple, a single atomic,
    /// or a whole interval; results are unioned. On the empty interval,
    /// `apply` returns empty.
    ///
    /// Unlike the source language, there is no runtime "unsupported
    /// shape" error: `ApplyOutcome` is a closed sum type, so the
    /// closure's return type already rules out any other shape.
    pub fn apply(&self, f: impl Fn(&Atomic<T>) -> ApplyOutcome<T>) -> Interval<T> {
        let mut acc = Interval::empty();
        for atom in self.atomics() {
            let piece = match f(atom) {
                ApplyOutcome::Quadruple(l, lo, up, r) => Interval::from_atomic(Atomic::new(l, lo, up, r)),
                ApplyOutcome::Atomic(a) => Interval::from_atomic(a),
                ApplyOutcome::Interval(i) => i,
            };
            acc = acc.union(&piece);
        }
        acc
    }
}
