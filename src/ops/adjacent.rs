//! Adjacency: `I` and `J` are disjoint and their union is a single
//! atomic.

use crate::domain::Domain;
use crate::interval::Interval;
use crate::ops::intersection::Intersection;
use crate::ops::union::Union;

pub trait Adjacent<Rhs = Self> {
    fn adjacent(&self, rhs: &Rhs) -> bool;
}

impl<T: Domain> Adjacent for Interval<T> {
    fn adjacent(&self, rhs: &Self) -> bool {
        self.intersection(rhs).is_empty() && self.union(rhs).is_atomic()
    }
}
