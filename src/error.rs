//! Error types.

/// Failures the crate can surface.
///
/// Passing a non-interval to `union`/`intersection`/`difference` is a type
/// error caught by the compiler, not a runtime [`SpanError`]. The variants
/// here cover the cases that remain genuinely runtime: out-of-range
/// positional access, and the dynamically-typed containment bridge
/// ([`crate::ops::contains::Interval::contains_any`]).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// Positional access past the end of an interval's atomics, in either
    /// direction.
    #[error("index {index} out of range for interval with {len} atomic(s)")]
    IndexOutOfRange { index: isize, len: usize },

    /// `contains_any` was called with a value whose type does not match
    /// the interval's domain.
    #[error("type mismatch: value is not a member of this interval's domain")]
    TypeMismatch,
}
