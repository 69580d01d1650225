//! Textual rendering of atomics and intervals.

use std::fmt;

use crate::atomic::Atomic;
use crate::domain::Domain;
use crate::interval::Interval;
use crate::limit::Limit;

fn fmt_limit<T: fmt::Display>(limit: &Limit<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match limit {
        Limit::NegInf => write!(f, "-inf"),
        Limit::PosInf => write!(f, "+inf"),
        Limit::Finite(v) => write!(f, "{v}"),
    }
}

impl<T: Domain + fmt::Display> fmt::Display for Atomic<T> {
    /// `[a,b]` / `(a,b)` / mixed brackets per side; a degenerate closed
    /// singleton prints as `[x]` instead of `[x,x]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left().is_closed() && self.right().is_closed() && self.lower() == self.upper() {
            write!(f, "[")?;
            fmt_limit(self.lower(), f)?;
            return write!(f, "]");
        }
        write!(f, "{}", if self.left().is_open() { "(" } else { "[" })?;
        fmt_limit(self.lower(), f)?;
        write!(f, ",")?;
        fmt_limit(self.upper(), f)?;
        write!(f, "{}", if self.right().is_open() { ")" } else { "]" })
    }
}

impl<T: Domain + fmt::Display> fmt::Display for Interval<T> {
    /// Empty renders as `()`; a union of atomics joins them with ` | ` in
    /// canonical order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        let mut atoms = self.atomics();
        if let Some(first) = atoms.next() {
            write!(f, "{first}")?;
        }
        for atom in atoms {
            write!(f, " | {atom}")?;
        }
        Ok(())
    }
}
