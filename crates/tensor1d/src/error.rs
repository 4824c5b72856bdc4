//! Error types for tensor construction and element access.

use std::error::Error;
use std::fmt;

/// Errors from constructing or accessing a [`Tensor`](crate::Tensor).
///
/// Every error is detected at the offending call and reported immediately;
/// there are no retries and no silent clamping. A failed access leaves the
/// tensor unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorError {
    /// Buffer allocation failed at construction time.
    ///
    /// No partial object survives: `Tensor::new` returns this error
    /// instead of a tensor.
    AllocationFailed {
        /// Element count that was requested.
        requested: usize,
    },
    /// Index outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the tensor at the time of the access.
        len: usize,
    },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "failed to allocate buffer for {requested} elements")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for tensor of length {len}")
            }
        }
    }
}

impl Error for TensorError {}
