//! Error types for `dynarray`.
//!
//! Only two things can go wrong: a construction argument is out of range,
//! or an index falls outside the live region `[0, len)`. "Not found" is an
//! expected outcome and is reported through `Option`/`bool`, never here.

use std::fmt;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative initial capacity was requested.
    InvalidArgument {
        /// The rejected capacity.
        capacity: isize,
    },

    /// A checked accessor was given an index outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { capacity } => {
                write!(f, "illegal capacity: {capacity}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for `dynarray` operations.
pub type Result<T> = std::result::Result<T, Error>;
