//! Errors raised by terminal operators and constructors.

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error from building or evaluating a query.
#[derive(Debug, Eq, PartialEq, Clone, thiserror::Error)]
pub enum Error {
    /// An argument value was rejected before any element was touched.
    ///
    /// Selectors, predicates and comparers are checked by the type system, so this is only
    /// produced for argument values, e.g. an [`Enumerable::range`](crate::Enumerable::range)
    /// whose last element does not fit in an `i64`.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: &'static str,
    },
    /// The sequence did not have the shape the operator requires.
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}

/// A sequence constraint violated by a terminal operator, see [`Error::Constraint`].
#[derive(Debug, Eq, PartialEq, Clone, Copy, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintViolation {
    /// No element matched, e.g. `first`, `last`, `single`, `max` or `min` on an empty sequence.
    #[error("sequence contains no matching element")]
    EmptySequence,
    /// `single` found more than one matching element.
    #[error("sequence contains more than one matching element")]
    MultipleMatches,
    /// `element_at` was given an index past the end of the sequence.
    #[error("index {index} is out of range")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
    },
}

impl Error {
    /// Returns the constraint violation, if this is a [`Error::Constraint`].
    pub fn constraint(&self) -> Option<ConstraintViolation> {
        match self {
            Self::Constraint(violation) => Some(*violation),
            Self::InvalidArgument { .. } => None,
        }
    }
}

pub(crate) fn empty_sequence() -> Error {
    Error::Constraint(ConstraintViolation::EmptySequence)
}

pub(crate) fn multiple_matches() -> Error {
    Error::Constraint(ConstraintViolation::MultipleMatches)
}

pub(crate) fn index_out_of_range(index: usize) -> Error {
    Error::Constraint(ConstraintViolation::IndexOutOfRange { index })
}
