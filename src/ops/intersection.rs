//! Intersection: pairwise-intersect every atomic of `self` against every
//! atomic of `rhs`, drop empties, canonicalize.

use crate::atomic::Atomic;
use crate::domain::Domain;
use crate::interval::Interval;

pub trait Intersection<Rhs = Self> {
    type Output;

    fn intersection(&self, rhs: &Rhs) -> Self::Output;
}

fn intersect_atomics<T: Domain>(a: &Atomic<T>, b: &Atomic<T>) -> Atomic<T> {
    let (lower, left) = match a.lower().partial_cmp(b.lower()) {
        Some(std::cmp::Ordering::Greater) => (a.lower().clone(), a.left()),
        Some(std::cmp::Ordering::Less) => (b.lower().clone(), b.left()),
        _ => (a.lower().clone(), a.left().combine(b.left())),
    };
    let (upper, right) = match a.upper().partial_cmp(b.upper()) {
        Some(std::cmp::Ordering::Less) => (a.upper().clone(), a.right()),
        Some(std::cmp::Ordering::Greater) => (b.upper().clone(), b.right()),
        _ => (a.upper().clone(), a.right().combine(b.right())),
    };
    Atomic::new(left, lower, upper, right)
}

impl<T: Domain> Intersection for Interval<T> {
    type Output = Interval<T>;

    fn intersection(&self, rhs: &Self) -> Self::Output {
        let mut atomics = Vec::new();
        for a in self.atomics() {
            for b in rhs.atomics() {
                let candidate = intersect_atomics(a, b);
                if !candidate.is_empty() {
                    atomics.push(candidate);
                }
            }
        }
        Interval::new_canonical(atomics)
    }
}

impl<T: Domain> std::ops::BitAnd for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}
