//! Complement: the sequence of gaps between atomics, with bound kinds
//! flipped.

use crate::atomic::Atomic;
use crate::domain::Domain;
use crate::interval::Interval;
use crate::limit::Limit;

pub trait Complement {
    type Output;

    fn complement(&self) -> Self::Output;
}

impl<T: Domain> Complement for Interval<T> {
    type Output = Interval<T>;

    fn complement(&self) -> Self::Output {
        let atoms: Vec<&Atomic<T>> = self.atomics().collect();
        if atoms.is_empty() {
            return Interval::closed(Limit::NegInf, Limit::PosInf);
        }

        let mut gaps = Vec::with_capacity(atoms.len() + 1);

        gaps.push(Atomic::new(
            atoms[0].left().flip(),
            Limit::NegInf,
            atoms[0].lower().clone(),
            atoms[0].left().flip(),
        ));

        for pair in atoms.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            gaps.push(Atomic::new(a.right().flip(), a.upper().clone(), b.lower().clone(), b.left().flip()));
        }

        let last = *atoms.last().unwrap();
        gaps.push(Atomic::new(last.right().flip(), last.upper().clone(), Limit::PosInf, last.right().flip()));

        Interval::new_canonical(gaps)
    }
}

impl<T: Domain> std::ops::Not for Interval<T> {
    type Output = Interval<T>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::union::Union;

    #[test]
    fn test_complement_of_empty() {
        assert_eq!(Interval::<i32>::empty().complement(), Interval::closed(Limit::NegInf, Limit::PosInf));
    }

    #[test]
    fn test_complement_of_real_line() {
        let all: Interval<i32> = Interval::closed(Limit::NegInf, Limit::PosInf);
        assert!(all.complement().is_empty());
    }

    #[test]
    fn test_complement_of_disjoint_union() {
        let i = Interval::closed(0, 1).union(&Interval::closed(2, 3));
        let expected = Interval::open(Limit::NegInf, 0)
            .union(&Interval::open(1, 2))
            .union(&Interval::open(3, Limit::PosInf));
        assert_eq!(i.complement(), expected);
    }

    #[test]
    fn test_involution() {
        let i = Interval::closed(0, 1).union(&Interval::open(2, 3));
        assert_eq!(i.complement().complement(), i);
    }
}
