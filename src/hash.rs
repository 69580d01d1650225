//! Hashing of whole intervals.
//!
//! Rust resolves "unhashable bound value" statically through the `Hash`
//! trait bound rather than as a runtime failure, so the leniency the
//! source language affords multi-atomic intervals (letting one
//! unhashable atomic be skipped) has no analogue here: either every bound
//! in the domain is `Hash` and the whole interval hashes, or the
//! interval's `Hash` impl is simply unavailable for that `T`.

use std::hash::{Hash, Hasher};

use crate::domain::Domain;
use crate::interval::Interval;

impl<T: Domain + Hash> Hash for Interval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomics.hash(state);
    }
}
