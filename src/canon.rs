//! Canonicalization: the single source of truth every operation funnels
//! through.

use crate::atomic::Atomic;
use crate::domain::Domain;
use crate::ord::{before, lower_rank};

/// Reduce an arbitrary bag of atomics to canonical form: non-empty,
/// sorted, disjoint, non-mergeable.
pub(crate) fn canonicalize<T: Domain>(atomics: Vec<Atomic<T>>) -> Vec<Atomic<T>> {
    let mut atomics: Vec<Atomic<T>> = atomics.into_iter().filter(|a| !a.is_empty()).collect();
    if atomics.is_empty() {
        return atomics;
    }

    atomics.sort_by(|a, b| lower_rank(&a.lower, a.left, &b.lower, b.left));

    let mut merged: Vec<Atomic<T>> = Vec::with_capacity(atomics.len());
    let mut current = atomics.remove(0);
    for next in atomics {
        if before(&current.upper, current.right, &next.lower, next.left) {
            merged.push(current);
            current = next;
        } else {
            current = merge_two(current, next);
        }
    }
    merged.push(current);
    merged
}

/// Merge two atomics known not to satisfy `before` in either direction.
fn merge_two<T: Domain>(a: Atomic<T>, b: Atomic<T>) -> Atomic<T> {
    let (upper, right) = match a.upper.partial_cmp(&b.upper) {
        Some(std::cmp::Ordering::Less) => (b.upper, b.right),
        Some(std::cmp::Ordering::Greater) => (a.upper, a.right),
        _ => (a.upper, a.right.merge(b.right)),
    };
    Atomic::new(a.left, a.lower, upper, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_empties() {
        let out = canonicalize(vec![Atomic::open(1, 1), Atomic::closed(0, 1)]);
        assert_eq!(out, vec![Atomic::closed(0, 1)]);
    }

    #[test]
    fn test_sorts_and_merges_touching_closed() {
        let out = canonicalize(vec![Atomic::closed(2, 3), Atomic::closed(0, 1)]);
        assert_eq!(out, vec![Atomic::closed(0, 3)]);
    }

    #[test]
    fn test_does_not_merge_open_gap() {
        let out = canonicalize(vec![Atomic::open(2, 3), Atomic::open(0, 1)]);
        assert_eq!(out, vec![Atomic::open(0, 1), Atomic::open(2, 3)]);
    }

    #[test]
    fn test_merges_open_open_touching_singleton() {
        let out = canonicalize(vec![
            Atomic::open(1, 2),
            Atomic::open(2, 3),
            Atomic::singleton(2),
        ]);
        assert_eq!(out, vec![Atomic::open(1, 3)]);
    }
}
