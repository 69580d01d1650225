//! Property-based checks of the universal invariants that must hold for
//! every interval, regardless of how it was built.

use quickcheck::TestResult;

use crate::atomic::Atomic;
use crate::bound::BoundType;
use crate::interval::Interval;
use crate::limit::Limit;
use crate::ops::{Complement, Contains, Difference, Intersection, Union};

fn clamp(x: i16) -> i32 {
    (x as i32).rem_euclid(20)
}

/// Build an arbitrary interval from a bag of raw quadruples, exercising
/// canonicalization's sort/merge sweep over whatever overlaps or touches
/// the generator happens to produce.
fn build(raw: Vec<(i16, i16, bool, bool)>) -> Interval<i32> {
    let atomics = raw.into_iter().map(|(a, b, left_closed, right_closed)| {
        let (lo, hi) = { let (a, b) = (clamp(a), clamp(b)); if a <= b { (a, b) } else { (b, a) } };
        let left = if left_closed { BoundType::Closed } else { BoundType::Open };
        let right = if right_closed { BoundType::Closed } else { BoundType::Open };
        Atomic::new(left, lo, hi, right)
    });
    Interval::from_atomics(atomics)
}

#[quickcheck]
fn prop_canonical(raw: Vec<(i16, i16, bool, bool)>) -> bool {
    let i = build(raw);
    let atoms: Vec<&Atomic<i32>> = i.atomics().collect();
    if atoms.iter().any(|a| a.is_empty()) {
        return false;
    }
    atoms.windows(2).all(|w| crate::ord::before(w[0].upper(), w[0].right(), w[1].lower(), w[1].left()))
}

#[quickcheck]
fn prop_involution(raw: Vec<(i16, i16, bool, bool)>) -> bool {
    let i = build(raw);
    i.complement().complement() == i
}

#[quickcheck]
fn prop_de_morgan_union(a: Vec<(i16, i16, bool, bool)>, b: Vec<(i16, i16, bool, bool)>) -> bool {
    let (i, j) = (build(a), build(b));
    i.union(&j).complement() == i.complement().intersection(&j.complement())
}

#[quickcheck]
fn prop_de_morgan_intersection(a: Vec<(i16, i16, bool, bool)>, b: Vec<(i16, i16, bool, bool)>) -> bool {
    let (i, j) = (build(a), build(b));
    i.intersection(&j).complement() == i.complement().union(&j.complement())
}

#[quickcheck]
fn prop_idempotent(raw: Vec<(i16, i16, bool, bool)>) -> bool {
    let i = build(raw);
    i.union(&i) == i && i.intersection(&i) == i && i.difference(&i).is_empty()
}

#[quickcheck]
fn prop_empty_absorbs(raw: Vec<(i16, i16, bool, bool)>) -> bool {
    let i = build(raw);
    let e = Interval::<i32>::empty();
    i.contains(&e) && i.intersection(&e).is_empty() && i.union(&e) == i
}

#[quickcheck]
fn prop_iteration_equals_structure(raw: Vec<(i16, i16, bool, bool)>) -> bool {
    let i = build(raw);
    Interval::from_atomics(i.atomics().cloned()) == i
}

#[quickcheck]
fn prop_infinity_never_contained(x: f64) -> TestResult {
    if !x.is_finite() {
        return TestResult::discard();
    }
    let all: Interval<f64> = Interval::closed(Limit::NegInf, Limit::PosInf);
    TestResult::from_bool(all.contains(&x) && !all.contains(&f64::INFINITY) && !all.contains(&f64::NEG_INFINITY))
}
