//! Overlap: `I.overlaps(J)` iff some atomic of `I` and some atomic of `J`
//! share more than a boundary.

use crate::domain::Domain;
use crate::interval::Interval;
use crate::ops::intersection::Intersection;

pub trait Overlaps<Rhs = Self> {
    fn overlaps(&self, rhs: &Rhs) -> bool;
}

impl<T: Domain> Overlaps for Interval<T> {
    fn overlaps(&self, rhs: &Self) -> bool {
        !self.intersection(rhs).is_empty()
    }
}
