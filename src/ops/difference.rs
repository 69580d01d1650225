//! Difference: `I \ J == I ∩ ~J`.

use crate::domain::Domain;
use crate::interval::Interval;
use crate::ops::complement::Complement;
use crate::ops::intersection::Intersection;

pub trait Difference<Rhs = Self> {
    type Output;

    fn difference(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: Domain> Difference for Interval<T> {
    type Output = Interval<T>;

    fn difference(&self, rhs: &Self) -> Self::Output {
        self.intersection(&rhs.complement())
    }
}

impl<T: Domain> std::ops::Sub for Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}
