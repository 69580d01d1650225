//! Union: concatenate and canonicalize.

use crate::domain::Domain;
use crate::interval::Interval;

pub trait Union<Rhs = Self> {
    type Output;

    fn union(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: Domain> Union for Interval<T> {
    type Output = Interval<T>;

    fn union(&self, rhs: &Self) -> Self::Output {
        let mut atomics = self.atomics.clone();
        atomics.extend(rhs.atomics.iter().cloned());
        Interval::new_canonical(atomics)
    }
}

impl<T: Domain> std::ops::BitOr for Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}
