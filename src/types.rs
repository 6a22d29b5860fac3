//! Contains the error type shared across the crate.

use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// An error type for invalid combinatorial parameters, reported at enumerator
/// construction time.
///
/// These are caller programming errors rather than transient conditions, so they
/// are raised synchronously by the constructors and never during iteration.
/// Index-based accessors like [`CartesianProduct::get`](crate::CartesianProduct::get)
/// instead return `None` on malformed input, so they can be used in
/// loop-termination idioms without error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The choose-count lies outside `1..=len` for a source of length `len`.
    ChooseCountOutOfRange {
        /// The requested choose-count.
        count: usize,
        /// The source length.
        len: usize,
    },
    /// The source is longer than the enumerator's supported maximum
    /// (for the mask-based enumerators, [`MAX_MASK_ELEMS`](crate::MAX_MASK_ELEMS)).
    AboveMaxElems {
        /// The source length.
        len: usize,
        /// The maximum supported length.
        max: usize,
    },
    /// The source sequence is empty but at least one element is required.
    EmptySource,
    /// A Cartesian product was requested over zero factor sequences.
    EmptyProduct,
    /// A Cartesian product factor has no elements, making the product size zero.
    EmptyFactor {
        /// The zero-based index of the offending factor.
        dim: usize,
    },
    /// A base-N tuple length of zero was requested.
    ZeroTupleLength,
    /// The number of arrangements does not fit in a `u128`.
    CountOverflow,
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::ChooseCountOutOfRange { count, len } => {
                write!(f, "choose-count {count} is outside the valid range 1..={len}")
            }
            Self::AboveMaxElems { len, max } => {
                write!(f, "source length {len} is above the maximum of {max}")
            }
            Self::EmptySource => write!(f, "the source sequence is empty"),
            Self::EmptyProduct => {
                write!(f, "a cartesian product requires at least one factor sequence")
            }
            Self::EmptyFactor { dim } => {
                write!(f, "cartesian product factor {dim} is empty")
            }
            Self::ZeroTupleLength => {
                write!(f, "a base-N tuple length must be at least 1")
            }
            Self::CountOverflow => {
                write!(f, "the number of arrangements does not fit in a u128")
            }
        }
    }
}

impl Error for RangeError {}
